use super::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{Debug, Display};

/// Identifier assigned to a feature by the draw toolkit.
///
/// GeoJSON allows string and numeric ids; both are normalised to their string form.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(String);

impl FeatureId {
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Reads a GeoJSON id. Only strings and numbers are ids.
	#[must_use]
	pub fn from_json(value: &Value) -> Option<FeatureId> {
		match value {
			Value::String(id) => Some(FeatureId::from(id.as_str())),
			Value::Number(id) => Some(FeatureId::from(id.to_string())),
			_ => None,
		}
	}
}

impl From<&str> for FeatureId {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl From<String> for FeatureId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<u64> for FeatureId {
	fn from(value: u64) -> Self {
		Self(value.to_string())
	}
}

impl Display for FeatureId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl Debug for FeatureId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// A feature pairs exactly one geometry with an optional id and a property bag.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<FeatureId>,
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry,
			properties: GeoProperties::new(),
		}
	}

	#[must_use]
	pub fn with_id(mut self, id: impl Into<FeatureId>) -> Self {
		self.id = Some(id.into());
		self
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	pub fn set_property(&mut self, key: &str, value: impl Into<Value>) {
		self.properties.insert(key.to_string(), value.into());
	}

	#[must_use]
	pub fn kind(&self) -> GeometryKind {
		self.geometry.kind()
	}

	/// Serialises the feature as a GeoJSON `Feature` object.
	#[must_use]
	pub fn to_json(&self) -> Value {
		let mut object = Map::new();
		object.insert("type".to_string(), Value::from("Feature"));
		if let Some(id) = &self.id {
			object.insert("id".to_string(), Value::from(id.as_str()));
		}
		object.insert("geometry".to_string(), self.geometry.to_json());
		object.insert("properties".to_string(), self.properties.to_json());
		Value::Object(object)
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		let mut feature = GeoFeature::new(Geometry::new_polygon(&[
			[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
			[[0.25, 0.25], [0.75, 0.25], [0.75, 0.75], [0.25, 0.75], [0.25, 0.25]],
		]))
		.with_id("square");
		feature.set_property("name", "Null Island block");
		feature
	}
}

impl From<Geometry> for GeoFeature {
	fn from(geometry: Geometry) -> Self {
		GeoFeature::new(geometry)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn feature_id_forms() {
		assert_eq!(FeatureId::from(42u64), FeatureId::from("42"));
		assert_eq!(FeatureId::from("abc").to_string(), "abc");
		assert_eq!(format!("{:?}", FeatureId::from("abc")), "#abc");
		assert_eq!(FeatureId::from_json(&json!(3)), Some(FeatureId::from("3")));
		assert_eq!(FeatureId::from_json(&json!("x")), Some(FeatureId::from("x")));
		assert_eq!(FeatureId::from_json(&json!([1])), None);
	}

	#[test]
	fn to_json_point() {
		let mut feature = GeoFeature::new(Geometry::new_point([13.4, 52.5])).with_id("p1");
		feature.set_property("name", "Berlin");
		assert_eq!(
			feature.to_json(),
			json!({
				"type": "Feature",
				"id": "p1",
				"geometry": {"type": "Point", "coordinates": [13.4, 52.5]},
				"properties": {"name": "Berlin"}
			})
		);
	}

	#[test]
	fn example_has_hole() {
		let feature = GeoFeature::new_example();
		assert_eq!(feature.kind(), GeometryKind::Polygon);
		match &feature.geometry {
			Geometry::Polygon(p) => assert_eq!(p.0.len(), 2),
			other => panic!("unexpected geometry {other:?}"),
		}
	}
}
