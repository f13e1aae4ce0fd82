use serde::Serialize;
use serde_json::Value;

/// The payload a tool call returns to the agent runtime: `{"result": ...}` or `{"error": "..."}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolResponse {
	Result(Value),
	Error(String),
}

impl ToolResponse {
	#[must_use]
	pub fn is_error(&self) -> bool {
		matches!(self, ToolResponse::Error(_))
	}

	#[must_use]
	pub fn result(&self) -> Option<&Value> {
		match self {
			ToolResponse::Result(value) => Some(value),
			ToolResponse::Error(_) => None,
		}
	}

	#[must_use]
	pub fn error(&self) -> Option<&str> {
		match self {
			ToolResponse::Result(_) => None,
			ToolResponse::Error(message) => Some(message),
		}
	}

	#[must_use]
	pub fn to_json(&self) -> Value {
		match self {
			ToolResponse::Result(value) => serde_json::json!({ "result": value }),
			ToolResponse::Error(message) => serde_json::json!({ "error": message }),
		}
	}
}

impl From<anyhow::Result<Value>> for ToolResponse {
	fn from(result: anyhow::Result<Value>) -> Self {
		match result {
			Ok(value) => ToolResponse::Result(value),
			Err(e) => ToolResponse::Error(format!("{e:#}")),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::anyhow;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn payload_shapes() {
		let ok = ToolResponse::Result(json!({"area": 1.5}));
		assert_eq!(ok.to_json(), json!({"result": {"area": 1.5}}));
		assert_eq!(serde_json::to_value(&ok).unwrap(), ok.to_json());
		assert_eq!(ok.result(), Some(&json!({"area": 1.5})));

		let failed = ToolResponse::Error("boom".to_string());
		assert!(failed.is_error());
		assert_eq!(failed.to_json(), json!({"error": "boom"}));
		assert_eq!(serde_json::to_value(&failed).unwrap(), failed.to_json());
	}

	#[test]
	fn from_result_keeps_context_chain() {
		let error: anyhow::Result<Value> = Err(anyhow!("inner").context("outer"));
		assert_eq!(ToolResponse::from(error).error(), Some("outer: inner"));
	}
}
