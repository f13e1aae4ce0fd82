use anyhow::{Result, ensure};
use serde::Deserialize;

/// Construction of buffer polygons.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct BufferConfig {
	/// Vertices per full circle.
	pub steps: u32,
}

impl Default for BufferConfig {
	fn default() -> Self {
		Self { steps: 64 }
	}
}

impl BufferConfig {
	pub fn check(&self) -> Result<()> {
		ensure!(self.steps >= 3, "buffer.steps must be at least 3, found {}", self.steps);
		Ok(())
	}
}
