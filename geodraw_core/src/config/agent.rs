use anyhow::{Result, ensure};
use serde::Deserialize;

pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are a helpful geospatial AI assistant. Your primary goal is to assist users with their questions related to maps, spatial analysis, and geographical data. Be concise and informative in your responses.";

/// Settings handed to the external agent runtime.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct AgentConfig {
	pub system_message: String,

	/// Upper bound for one streamed agent response.
	pub max_duration_seconds: u32,
}

impl Default for AgentConfig {
	fn default() -> Self {
		Self {
			system_message: DEFAULT_SYSTEM_MESSAGE.to_string(),
			max_duration_seconds: 30,
		}
	}
}

impl AgentConfig {
	pub fn check(&self) -> Result<()> {
		ensure!(
			!self.system_message.trim().is_empty(),
			"agent.system_message must not be empty"
		);
		ensure!(
			self.max_duration_seconds > 0,
			"agent.max_duration_seconds must be positive"
		);
		Ok(())
	}
}
