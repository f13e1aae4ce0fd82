use super::{super::Position, GeometryTrait};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// An ordered sequence of at least two positions.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Position>);

impl LineStringGeometry {
	/// First and last position of the line, if it has any.
	#[must_use]
	pub fn endpoints(&self) -> Option<(Position, Position)> {
		Some((*self.0.first()?, *self.0.last()?))
	}
}

impl GeometryTrait for LineStringGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(
			self.0.len() >= 2,
			"LineString must have at least 2 positions, found {}",
			self.0.len()
		);
		Ok(())
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(Position::to_json).collect::<Vec<_>>())
	}

	fn vertices(&self) -> Vec<Position> {
		self.0.clone()
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Position);

impl From<&LineStringGeometry> for geo::LineString<f64> {
	fn from(value: &LineStringGeometry) -> Self {
		geo::LineString(value.0.iter().map(geo::Coord::from).collect())
	}
}

impl From<geo::LineString<f64>> for LineStringGeometry {
	fn from(value: geo::LineString<f64>) -> Self {
		LineStringGeometry(value.into_iter().map(Position::from).collect())
	}
}
