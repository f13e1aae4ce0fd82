use geodraw_geometry::{FeatureId, GeoFeature, GeometryKind};
use serde::Serialize;
use std::fmt::Display;

/// The single feature currently eligible for analysis, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActiveSelection {
	feature: Option<GeoFeature>,
}

impl ActiveSelection {
	#[must_use]
	pub fn new(feature: Option<GeoFeature>) -> Self {
		Self { feature }
	}

	#[must_use]
	pub fn feature(&self) -> Option<&GeoFeature> {
		self.feature.as_ref()
	}

	#[must_use]
	pub fn kind(&self) -> Option<GeometryKind> {
		self.feature.as_ref().map(GeoFeature::kind)
	}

	#[must_use]
	pub fn id(&self) -> Option<&FeatureId> {
		self.feature.as_ref().and_then(|feature| feature.id.as_ref())
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.feature.is_none()
	}
}

/// What caused an active-changed notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeCause {
	Created,
	Selected,
	Updated,
	Deleted,
	Deselected,
}

impl Display for ChangeCause {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			ChangeCause::Created => "created",
			ChangeCause::Selected => "selected",
			ChangeCause::Updated => "updated",
			ChangeCause::Deleted => "deleted",
			ChangeCause::Deselected => "deselected",
		})
	}
}

/// The active-changed notification.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectionChange {
	pub cause: ChangeCause,
	pub kind: Option<GeometryKind>,
	pub id: Option<FeatureId>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use geodraw_geometry::Geometry;

	#[test]
	fn empty_selection() {
		let selection = ActiveSelection::default();
		assert!(selection.is_empty());
		assert_eq!(selection.kind(), None);
		assert_eq!(selection.id(), None);
	}

	#[test]
	fn active_selection() {
		let feature = GeoFeature::new(Geometry::new_line_string(&[[0, 0], [1, 1]])).with_id("l1");
		let selection = ActiveSelection::new(Some(feature));
		assert_eq!(selection.kind(), Some(GeometryKind::LineString));
		assert_eq!(selection.id(), Some(&FeatureId::from("l1")));
	}

	#[test]
	fn change_serializes_lowercase_cause() {
		let change = SelectionChange {
			cause: ChangeCause::Deselected,
			kind: None,
			id: None,
		};
		assert_eq!(
			serde_json::to_value(&change).unwrap(),
			serde_json::json!({"cause": "deselected", "kind": null, "id": null})
		);
	}
}
