use anyhow::{Result, ensure};
use geodraw_geometry::Units;
use serde::Deserialize;

/// Defaults of the interactive analysis path.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct AnalysisConfig {
	/// Buffer radius used when a request does not name one.
	pub buffer_radius: f64,

	/// Units of the default buffer radius.
	pub buffer_units: Units,

	/// Units in which line distances are reported.
	pub distance_units: Units,

	/// Number of decimals numeric results are rounded to.
	pub decimals: u8,
}

impl Default for AnalysisConfig {
	fn default() -> Self {
		Self {
			buffer_radius: 1.0,
			buffer_units: Units::Kilometers,
			distance_units: Units::Kilometers,
			decimals: 2,
		}
	}
}

impl AnalysisConfig {
	pub fn check(&self) -> Result<()> {
		ensure!(
			self.buffer_radius.is_finite() && self.buffer_radius > 0.0,
			"analysis.buffer_radius must be a positive number, found {}",
			self.buffer_radius
		);
		ensure!(
			self.decimals <= 15,
			"analysis.decimals must be at most 15, found {}",
			self.decimals
		);
		Ok(())
	}

	/// Rounds `value` to the configured number of decimals.
	#[must_use]
	pub fn round(&self, value: f64) -> f64 {
		let factor = 10f64.powi(i32::from(self.decimals));
		(value * factor).round() / factor
	}
}
