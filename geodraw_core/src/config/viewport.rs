use serde::Deserialize;

/// Options of fit-to-bounds requests.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct ViewportConfig {
	/// Padding around the bounds, in pixels.
	pub padding: u32,

	/// Maximum zoom level the map may fly to.
	pub max_zoom: u8,
}

impl Default for ViewportConfig {
	fn default() -> Self {
		Self {
			padding: 100,
			max_zoom: 18,
		}
	}
}
