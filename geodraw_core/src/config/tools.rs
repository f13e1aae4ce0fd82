use geodraw_geometry::Units;
use serde::Deserialize;

/// Unit defaults of the agent tools, applied when a call omits `units`.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct ToolsConfig {
	pub distance_units: Units,
	pub buffer_units: Units,
}

impl Default for ToolsConfig {
	fn default() -> Self {
		Self {
			distance_units: Units::Kilometers,
			buffer_units: Units::Meters,
		}
	}
}
