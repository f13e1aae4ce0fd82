use crate::{ToolArgs, ToolResponse};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Value, json};

/// A tool the agent runtime can call.
#[async_trait]
pub trait ToolTrait: Send + Sync {
	/// Name the agent uses to call the tool.
	fn name(&self) -> &'static str;

	/// Natural-language description shown to the agent.
	fn description(&self) -> &'static str;

	/// JSON-Schema of the argument object.
	fn parameters(&self) -> Value;

	/// Validates the arguments and measures. Errors are turned into payloads by [`execute`](Self::execute).
	async fn run(&self, args: &ToolArgs) -> Result<Value>;

	/// Runs the tool on raw arguments. Never fails: every error becomes `{"error": ...}`.
	async fn execute(&self, raw_args: Value) -> ToolResponse {
		let result = match ToolArgs::parse(raw_args) {
			Ok(args) => self.run(&args).await,
			Err(e) => Err(e),
		};
		match &result {
			Ok(_) => log::debug!("tool {} succeeded", self.name()),
			Err(e) => log::warn!("tool {} failed: {e:#}", self.name()),
		}
		ToolResponse::from(result)
	}

	/// The definition handed to the agent runtime.
	fn definition(&self) -> Value {
		json!({
			"name": self.name(),
			"description": self.description(),
			"parameters": self.parameters(),
		})
	}

	/// Markdown documentation of the tool.
	fn get_docs(&self) -> String {
		let parameters = serde_json::to_string_pretty(&self.parameters()).unwrap_or_default();
		format!("{}\n\n### Parameters\n\n```json\n{parameters}\n```\n", self.description())
	}
}
