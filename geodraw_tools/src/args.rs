use anyhow::{Context, Result, anyhow, bail};
use geodraw_geometry::{FeatureContract, GeoFeature, Units, json_type, preprocess};
use serde_json::{Map, Value};

/// The argument object of one tool call.
///
/// The object itself, and every feature inside it, may arrive as a JSON-encoded string.
/// Unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToolArgs(Map<String, Value>);

impl ToolArgs {
	pub fn parse(raw: Value) -> Result<ToolArgs> {
		match preprocess(raw) {
			Value::Object(map) => Ok(ToolArgs(map)),
			Value::Null => Ok(ToolArgs::default()),
			other => bail!("tool arguments must be an object, found {}", json_type(&other)),
		}
	}

	fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name).filter(|value| !value.is_null())
	}

	/// A required feature argument, validated against `contract`.
	pub fn feature(&self, name: &str, contract: FeatureContract) -> Result<GeoFeature> {
		let raw = self
			.get(name)
			.ok_or_else(|| anyhow!("missing required argument '{name}'"))?;
		contract
			.validate(raw.clone())
			.with_context(|| format!("invalid argument '{name}'"))
	}

	/// An optional units argument; absent means `default`, an explicit null is rejected.
	pub fn units(&self, name: &str, default: Units) -> Result<Units> {
		match self.0.get(name) {
			None => Ok(default),
			Some(Value::String(text)) => text.parse(),
			Some(other) => bail!(
				"units must be 'kilometers' or 'meters', found {}",
				json_type(other)
			),
		}
	}

	/// A required, strictly positive number.
	pub fn positive_number(&self, name: &str) -> Result<f64> {
		let value = self
			.get(name)
			.ok_or_else(|| anyhow!("missing required argument '{name}'"))?;
		let number = value
			.as_f64()
			.ok_or_else(|| anyhow!("'{name}' must be a positive number, found {}", json_type(value)))?;
		if !(number.is_finite() && number > 0.0) {
			bail!("'{name}' must be a positive number, found {number}");
		}
		Ok(number)
	}
}
