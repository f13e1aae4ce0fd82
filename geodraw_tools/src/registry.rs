use crate::{ToolResponse, ToolTrait, tools::get_tools};
use geodraw_core::config::{Config, ToolsConfig};
use geodraw_geometry::{MeasurementEngine, SphericalEngine};
use itertools::Itertools;
use serde_json::Value;
use std::{collections::HashMap, sync::Arc};

/// All tools by name.
pub struct ToolRegistry {
	tools: HashMap<String, Box<dyn ToolTrait>>,
}

impl ToolRegistry {
	#[must_use]
	pub fn new_empty() -> Self {
		ToolRegistry { tools: HashMap::new() }
	}

	/// The four measurement tools on `engine`, with unit defaults from `config`.
	#[must_use]
	pub fn new_default(engine: &Arc<dyn MeasurementEngine>, config: &ToolsConfig) -> Self {
		let mut registry = ToolRegistry::new_empty();
		for tool in get_tools(engine, config) {
			registry.add_tool(tool);
		}
		registry
	}

	#[must_use]
	pub fn from_config(config: &Config) -> Self {
		let engine: Arc<dyn MeasurementEngine> = Arc::new(SphericalEngine::new(config.buffer.steps));
		ToolRegistry::new_default(&engine, &config.tools)
	}

	pub fn add_tool(&mut self, tool: Box<dyn ToolTrait>) {
		self.tools.insert(tool.name().to_string(), tool);
	}

	#[must_use]
	pub fn get(&self, name: &str) -> Option<&dyn ToolTrait> {
		self.tools.get(name).map(|tool| tool.as_ref())
	}

	/// Tool names in alphabetical order.
	#[must_use]
	pub fn names(&self) -> Vec<&str> {
		self.tools.keys().map(String::as_str).sorted().collect()
	}

	/// Definitions of all tools, ordered by name.
	#[must_use]
	pub fn definitions(&self) -> Vec<Value> {
		self
			.tools
			.values()
			.sorted_by_key(|tool| tool.name())
			.map(|tool| tool.definition())
			.collect()
	}

	/// Calls the tool `name`. Unknown names become an error payload like any other failure.
	pub async fn call(&self, name: &str, raw_args: Value) -> ToolResponse {
		match self.tools.get(name) {
			Some(tool) => tool.execute(raw_args).await,
			None => {
				log::warn!("agent called unknown tool '{name}'");
				ToolResponse::Error(format!(
					"unknown tool '{name}', expected one of: {}",
					self.names().join(", ")
				))
			}
		}
	}

	pub fn get_docs(&self) -> String {
		[
			String::from("# Geospatial analysis tools\n\nEvery feature argument accepts a GeoJSON object or its JSON-string encoding. Results are returned as `{\"result\": ...}`, failures as `{\"error\": \"...\"}`.\n"),
			self
				.tools
				.values()
				.sorted_by_key(|tool| tool.name())
				.map(|tool| format!("\n## {}\n\n{}", tool.name(), tool.get_docs()))
				.join(""),
		]
		.join("")
	}
}

impl Default for ToolRegistry {
	fn default() -> Self {
		ToolRegistry::from_config(&Config::default())
	}
}
