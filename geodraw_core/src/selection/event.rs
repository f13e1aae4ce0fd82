use geodraw_geometry::{FeatureContract, FeatureId, GeoFeature};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A notification from the draw toolkit, as delivered on the wire.
///
/// Features are kept as raw JSON here; they are read when the event is applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DrawEvent {
	#[serde(rename = "draw.create")]
	Create { features: Vec<Value> },

	#[serde(rename = "draw.update")]
	Update { features: Vec<Value> },

	/// Deleted features are identified by the ids of `features` and by `ids`.
	#[serde(rename = "draw.delete")]
	Delete {
		#[serde(default)]
		features: Vec<Value>,
		#[serde(default)]
		ids: Vec<Value>,
	},

	/// An empty feature list means deselection.
	#[serde(rename = "draw.selectionchange")]
	SelectionChange {
		#[serde(default)]
		features: Vec<Value>,
	},
}

impl DrawEvent {
	#[must_use]
	pub fn name(&self) -> &'static str {
		match self {
			DrawEvent::Create { .. } => "draw.create",
			DrawEvent::Update { .. } => "draw.update",
			DrawEvent::Delete { .. } => "draw.delete",
			DrawEvent::SelectionChange { .. } => "draw.selectionchange",
		}
	}

	pub fn create(feature: &GeoFeature) -> Self {
		DrawEvent::Create {
			features: vec![feature.to_json()],
		}
	}

	pub fn select(feature: &GeoFeature) -> Self {
		DrawEvent::SelectionChange {
			features: vec![feature.to_json()],
		}
	}

	pub fn deselect() -> Self {
		DrawEvent::SelectionChange { features: Vec::new() }
	}

	pub fn update(feature: &GeoFeature) -> Self {
		DrawEvent::Update {
			features: vec![feature.to_json()],
		}
	}

	pub fn delete(id: impl Into<FeatureId>) -> Self {
		DrawEvent::Delete {
			features: Vec::new(),
			ids: vec![Value::from(id.into().as_str())],
		}
	}

	/// Reads the features carried by the event. Unreadable features are skipped with a warning.
	pub(crate) fn read_features(&self) -> Vec<GeoFeature> {
		let features = match self {
			DrawEvent::Create { features }
			| DrawEvent::Update { features }
			| DrawEvent::Delete { features, .. }
			| DrawEvent::SelectionChange { features } => features,
		};
		features
			.iter()
			.filter_map(|raw| match FeatureContract::Any.read(raw.clone()) {
				Ok(feature) => Some(feature),
				Err(e) => {
					log::warn!("ignoring unreadable feature in {}: {e}", self.name());
					None
				}
			})
			.collect()
	}

	/// Ids of the features a delete event removes.
	pub(crate) fn deleted_ids(&self) -> Vec<FeatureId> {
		match self {
			DrawEvent::Delete { features, ids } => features
				.iter()
				.filter_map(|feature| feature.get("id"))
				.chain(ids.iter())
				.filter_map(FeatureId::from_json)
				.collect(),
			_ => Vec::new(),
		}
	}
}
