use super::*;
use anyhow::Result;
use serde_json::{Value, json};
use std::fmt::Debug;

/// Geometry payload with an unrecognized GeoJSON tag.
///
/// The coordinates are kept as opaque JSON; only kind-agnostic operations (centroid) accept it.
#[derive(Clone, PartialEq)]
pub struct OtherGeometry {
	pub type_name: String,
	pub coordinates: Value,
}

impl OtherGeometry {
	/// Every numeric position nested anywhere in the coordinate payload.
	///
	/// An array whose first two entries are numbers is taken as a position.
	#[must_use]
	pub fn positions(&self) -> Vec<Position> {
		fn collect(value: &Value, out: &mut Vec<Position>) {
			if let Value::Array(items) = value {
				match (items.first().and_then(Value::as_f64), items.get(1).and_then(Value::as_f64)) {
					(Some(x), Some(y)) => out.push(Position::new(x, y)),
					_ => items.iter().for_each(|item| collect(item, out)),
				}
			}
		}

		let mut positions = Vec::new();
		collect(&self.coordinates, &mut positions);
		positions
	}
}

#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	Other(OtherGeometry),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_other(type_name: &str, coordinates: Value) -> Self {
		Self::Other(OtherGeometry {
			type_name: type_name.to_string(),
			coordinates,
		})
	}

	#[must_use]
	pub fn kind(&self) -> GeometryKind {
		match self {
			Geometry::Point(_) => GeometryKind::Point,
			Geometry::LineString(_) => GeometryKind::LineString,
			Geometry::Polygon(_) => GeometryKind::Polygon,
			Geometry::Other(_) => GeometryKind::Other,
		}
	}

	/// The GeoJSON tag of the geometry; unrecognized tags are returned as received.
	#[must_use]
	pub fn type_name(&self) -> &str {
		match self {
			Geometry::Other(g) => &g.type_name,
			_ => self.kind().as_str(),
		}
	}

	pub fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::Other(_) => Ok(()),
		}
	}

	/// Every vertex of the geometry, ring closing positions excluded.
	#[must_use]
	pub fn vertices(&self) -> Vec<Position> {
		match self {
			Geometry::Point(g) => g.vertices(),
			Geometry::LineString(g) => g.vertices(),
			Geometry::Polygon(g) => g.vertices(),
			Geometry::Other(g) => g.positions(),
		}
	}

	#[must_use]
	pub fn to_json(&self) -> Value {
		let coordinates = match self {
			Geometry::Point(g) => g.to_coord_json(),
			Geometry::LineString(g) => g.to_coord_json(),
			Geometry::Polygon(g) => g.to_coord_json(),
			Geometry::Other(g) => g.coordinates.clone(),
		};
		json!({ "type": self.type_name(), "coordinates": coordinates })
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::Other(g) => &g.coordinates,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}
