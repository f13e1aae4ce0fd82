use geodraw_geometry::GeoFeature;
use serde::{Serialize, Serializer};
use std::fmt::Display;

/// A result value: numbers for measurements, text for coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisValue {
	Number(f64),
	Text(String),
}

impl Display for AnalysisValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			AnalysisValue::Number(v) => write!(f, "{v}"),
			AnalysisValue::Text(v) => f.write_str(v),
		}
	}
}

impl From<f64> for AnalysisValue {
	fn from(value: f64) -> Self {
		AnalysisValue::Number(value)
	}
}

impl From<String> for AnalysisValue {
	fn from(value: String) -> Self {
		AnalysisValue::Text(value)
	}
}

/// The presentation record of the result panel.
///
/// A hidden record is the normal state. A visible record either carries a value or,
/// after a failed measurement, an error-flavored title and no value.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
	pub is_visible: bool,
	pub title: String,
	pub value: Option<AnalysisValue>,
	pub unit: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	/// Geometry to draw on the map alongside the panel (buffer polygon, centroid point).
	#[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_overlay")]
	pub overlay: Option<GeoFeature>,
}

impl AnalysisResult {
	#[must_use]
	pub fn hidden() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn success(
		title: &str,
		value: impl Into<AnalysisValue>,
		unit: Option<&str>,
		overlay: Option<GeoFeature>,
	) -> Self {
		Self {
			is_visible: true,
			title: title.to_string(),
			value: Some(value.into()),
			unit: unit.map(str::to_string),
			error: None,
			overlay,
		}
	}

	#[must_use]
	pub fn failure(title: &str, error: impl Display) -> Self {
		Self {
			is_visible: true,
			title: format!("{title} failed"),
			value: None,
			unit: None,
			error: Some(error.to_string()),
			overlay: None,
		}
	}

	/// The value line of the panel: value and unit, or "N/A".
	#[must_use]
	pub fn display_value(&self) -> String {
		match (&self.value, &self.unit) {
			(Some(value), Some(unit)) => format!("{value} {unit}"),
			(Some(value), None) => value.to_string(),
			(None, _) => "N/A".to_string(),
		}
	}
}

#[allow(clippy::ref_option)]
fn serialize_overlay<S: Serializer>(overlay: &Option<GeoFeature>, serializer: S) -> Result<S::Ok, S::Error> {
	overlay.as_ref().map(GeoFeature::to_json).serialize(serializer)
}
