use serde_json::Value;
use std::fmt::Debug;

/// A single position: longitude, latitude and an optional altitude.
///
/// No range clamping is applied; longitudes and latitudes are taken as given.
#[derive(Clone, Copy, PartialEq)]
pub struct Position {
	xy: [f64; 2],
	z: Option<f64>,
}

impl Position {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { xy: [x, y], z: None }
	}

	#[must_use]
	pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
		Self { xy: [x, y], z: Some(z) }
	}

	/// Longitude in degrees.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.xy[0]
	}

	/// Latitude in degrees.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.xy[1]
	}

	/// Altitude, if the position carried one.
	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	#[must_use]
	pub fn as_xy(&self) -> [f64; 2] {
		self.xy
	}

	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.xy.iter().all(|v| v.is_finite())
	}

	/// Compares longitude and latitude only.
	#[must_use]
	pub fn same_xy(&self, other: &Position) -> bool {
		self.xy == other.xy
	}

	#[must_use]
	pub fn to_json(&self) -> Value {
		match self.z {
			Some(z) => Value::from(vec![self.xy[0], self.xy[1], z]),
			None => Value::from(self.xy.to_vec()),
		}
	}
}

impl<'a, T> From<&'a [T; 2]> for Position
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Position::new(value[0].into(), value[1].into())
	}
}

impl From<[f64; 2]> for Position {
	fn from(value: [f64; 2]) -> Self {
		Position::new(value[0], value[1])
	}
}

impl From<[f64; 3]> for Position {
	fn from(value: [f64; 3]) -> Self {
		Position::new_3d(value[0], value[1], value[2])
	}
}

impl From<(f64, f64)> for Position {
	fn from(value: (f64, f64)) -> Self {
		Position::new(value.0, value.1)
	}
}

impl From<&(f64, f64)> for Position {
	fn from(value: &(f64, f64)) -> Self {
		Position::new(value.0, value.1)
	}
}

impl From<geo::Coord> for Position {
	fn from(value: geo::Coord) -> Self {
		Position::new(value.x, value.y)
	}
}

impl From<&Position> for geo::Coord {
	fn from(value: &Position) -> Self {
		geo::Coord {
			x: value.x(),
			y: value.y(),
		}
	}
}

impl Debug for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.z {
			Some(z) => [self.xy[0], self.xy[1], z].fmt(f),
			None => self.xy.fmt(f),
		}
	}
}
