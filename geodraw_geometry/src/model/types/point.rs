use super::{super::Position, GeometryTrait};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// A single position on the map.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Position);

impl PointGeometry {
	#[must_use]
	pub fn new(position: Position) -> Self {
		Self(position)
	}
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}
	#[must_use]
	pub fn as_position(&self) -> &Position {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(self.0.is_finite(), "Point coordinates must be finite numbers");
		Ok(())
	}

	fn to_coord_json(&self) -> Value {
		self.0.to_json()
	}

	fn vertices(&self) -> Vec<Position> {
		vec![self.0]
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl From<Position> for PointGeometry {
	fn from(value: Position) -> Self {
		Self(value)
	}
}

impl From<[f64; 2]> for PointGeometry {
	fn from(value: [f64; 2]) -> Self {
		Self(Position::from(value))
	}
}

impl<'a, T> From<&'a [T; 2]> for PointGeometry
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Self(Position::from(value))
	}
}

impl From<geo::Point<f64>> for PointGeometry {
	fn from(value: geo::Point<f64>) -> Self {
		Self(Position::from(value.0))
	}
}

impl From<&PointGeometry> for geo::Point<f64> {
	fn from(value: &PointGeometry) -> Self {
		geo::Point(geo::Coord::from(&value.0))
	}
}
