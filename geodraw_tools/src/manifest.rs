use crate::ToolRegistry;
use geodraw_core::config::AgentConfig;
use serde::Serialize;
use serde_json::Value;

/// Everything the external agent runtime needs: prompt, time limit and tool definitions.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentManifest {
	pub system_message: String,
	pub max_duration_seconds: u32,
	pub tools: Vec<Value>,
}

impl AgentManifest {
	#[must_use]
	pub fn new(registry: &ToolRegistry, config: &AgentConfig) -> Self {
		Self {
			system_message: config.system_message.clone(),
			max_duration_seconds: config.max_duration_seconds,
			tools: registry.definitions(),
		}
	}

	#[must_use]
	pub fn to_json(&self) -> Value {
		serde_json::to_value(self).unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn manifest_from_defaults() {
		let manifest = AgentManifest::new(&ToolRegistry::default(), &AgentConfig::default());
		let json = manifest.to_json();
		assert_eq!(json["maxDurationSeconds"], 30);
		assert!(
			json["systemMessage"]
				.as_str()
				.unwrap()
				.starts_with("You are a helpful geospatial AI assistant.")
		);
		assert_eq!(json["tools"].as_array().unwrap().len(), 4);
		assert_eq!(json["tools"][0]["name"], "calculateCentroid");
	}
}
