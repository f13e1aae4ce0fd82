use super::{super::Position, GeometryTrait, RingGeometry};
use anyhow::{Context, Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// A polygon: the first ring is the exterior, every further ring is a hole.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	#[must_use]
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	pub fn interiors(&self) -> impl Iterator<Item = &RingGeometry> {
		self.0.iter().skip(1)
	}
}

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "Polygon must have at least one ring");
		for (index, ring) in self.0.iter().enumerate() {
			ring.verify().with_context(|| format!("in ring {index}"))?;
		}
		Ok(())
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(RingGeometry::to_coord_json).collect::<Vec<_>>())
	}

	fn vertices(&self) -> Vec<Position> {
		self.0.iter().flat_map(RingGeometry::vertices).collect()
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(RingGeometry::from(exterior));
		for interior in interiors {
			rings.push(RingGeometry::from(interior));
		}
		PolygonGeometry(rings)
	}
}

impl From<&PolygonGeometry> for geo::Polygon<f64> {
	fn from(value: &PolygonGeometry) -> Self {
		let exterior = value
			.exterior()
			.map_or_else(|| geo::LineString(Vec::new()), geo::LineString::from);
		let interiors = value.interiors().map(geo::LineString::from).collect();
		geo::Polygon::new(exterior, interiors)
	}
}
