use super::{super::Position, GeometryTrait};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// A closed sequence of positions bounding a polygon or one of its holes.
///
/// A valid ring has at least 4 positions and its first and last positions are equal.
/// Closure is checked by [`GeometryTrait::verify`], never repaired.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Position>);

impl RingGeometry {
	#[must_use]
	pub fn is_closed(&self) -> bool {
		match (self.0.first(), self.0.last()) {
			(Some(first), Some(last)) => first.same_xy(last),
			_ => false,
		}
	}

	/// Number of pairwise distinct vertices, ignoring altitude.
	#[must_use]
	pub fn distinct_vertex_count(&self) -> usize {
		let mut distinct: Vec<[f64; 2]> = Vec::new();
		for p in &self.0 {
			let xy = p.as_xy();
			if !distinct.contains(&xy) {
				distinct.push(xy);
			}
		}
		distinct.len()
	}
}

impl GeometryTrait for RingGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(
			self.0.len() >= 4,
			"ring must have at least 4 positions, found {}",
			self.0.len()
		);
		ensure!(self.is_closed(), "ring must be closed (first and last position must be equal)");
		Ok(())
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(Position::to_json).collect::<Vec<_>>())
	}

	fn vertices(&self) -> Vec<Position> {
		let mut vertices = self.0.clone();
		if self.is_closed() && vertices.len() > 1 {
			vertices.pop();
		}
		vertices
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Position);

/// Converts a `geo::LineString<f64>` into a `RingGeometry`, preserving the order of coordinates.
impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Position::from).collect())
	}
}

impl From<&RingGeometry> for geo::LineString<f64> {
	fn from(value: &RingGeometry) -> Self {
		geo::LineString(value.0.iter().map(geo::Coord::from).collect())
	}
}
