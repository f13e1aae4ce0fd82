//! JSON-Schema fragments of the tool parameters.

use geodraw_geometry::{FeatureContract, Units};
use serde_json::{Value, json};

fn position() -> Value {
	json!({
		"type": "array",
		"items": {"type": "number"},
		"minItems": 2,
		"maxItems": 3,
		"description": "A single position: [longitude, latitude, optional altitude]"
	})
}

fn geometry(contract: FeatureContract) -> Value {
	let (tag, coordinates) = match contract {
		FeatureContract::Point => ("Point", position()),
		FeatureContract::LineString => (
			"LineString",
			json!({"type": "array", "items": position(), "minItems": 2}),
		),
		FeatureContract::Polygon => (
			"Polygon",
			json!({
				"type": "array",
				"description": "Array of linear rings. First is exterior, others are interior holes.",
				"items": {
					"type": "array",
					"items": position(),
					"minItems": 4,
					"description": "A linear ring (array of positions). First and last position must be the same."
				}
			}),
		),
		FeatureContract::Any => {
			return json!({
				"type": "object",
				"properties": {"type": {"type": "string"}, "coordinates": {}},
				"required": ["type"]
			});
		}
	};
	json!({
		"type": "object",
		"properties": {"type": {"const": tag}, "coordinates": coordinates},
		"required": ["type", "coordinates"]
	})
}

/// A feature argument: the GeoJSON object or its JSON-string encoding.
pub fn feature(contract: FeatureContract) -> Value {
	json!({
		"description": contract.describe(),
		"anyOf": [
			{
				"type": "object",
				"properties": {
					"type": {"const": "Feature"},
					"geometry": geometry(contract),
					"properties": {"type": ["object", "null"]}
				},
				"required": ["type", "geometry"]
			},
			{"type": "string"}
		]
	})
}

pub fn units(default: Units, what: &str) -> Value {
	json!({
		"type": "string",
		"enum": [Units::Kilometers.as_str(), Units::Meters.as_str()],
		"default": default.as_str(),
		"description": format!("Units for {what} (kilometers or meters). Defaults to '{default}'.")
	})
}

pub fn object(properties: Value, required: &[&str]) -> Value {
	json!({
		"type": "object",
		"properties": properties,
		"required": required
	})
}
