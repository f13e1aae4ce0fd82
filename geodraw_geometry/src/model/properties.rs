use serde_json::{Map, Value};
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// Open key/value property bag of a feature. Keys are unique, values are opaque JSON.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	properties: BTreeMap<String, Value>,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: BTreeMap::new(),
		}
	}
	pub fn insert(&mut self, key: String, value: Value) {
		self.properties.insert(key, value);
	}
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.properties.get(key)
	}
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
		self.properties.iter()
	}

	#[must_use]
	pub fn to_json(&self) -> Value {
		Value::Object(
			self
				.properties
				.iter()
				.map(|(k, v)| (k.clone(), v.clone()))
				.collect::<Map<String, Value>>(),
		)
	}
}

impl From<Map<String, Value>> for GeoProperties {
	fn from(value: Map<String, Value>) -> Self {
		GeoProperties {
			properties: value.into_iter().collect(),
		}
	}
}

impl From<Vec<(&str, Value)>> for GeoProperties {
	fn from(value: Vec<(&str, Value)>) -> Self {
		GeoProperties {
			properties: value.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
		}
	}
}

impl FromIterator<(String, Value)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
		GeoProperties {
			properties: BTreeMap::from_iter(iter),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}
