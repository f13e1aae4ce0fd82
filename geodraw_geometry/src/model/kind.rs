use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt::Display, str::FromStr};

/// The tag distinguishing the geometry shapes the system understands.
///
/// Every GeoJSON tag that is not `Point`, `LineString` or `Polygon` maps to [`GeometryKind::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
	Point,
	LineString,
	Polygon,
	Other,
}

impl GeometryKind {
	#[must_use]
	pub fn from_tag(tag: &str) -> Self {
		match tag {
			"Point" => GeometryKind::Point,
			"LineString" => GeometryKind::LineString,
			"Polygon" => GeometryKind::Polygon,
			_ => GeometryKind::Other,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			GeometryKind::Point => "Point",
			GeometryKind::LineString => "LineString",
			GeometryKind::Polygon => "Polygon",
			GeometryKind::Other => "Other",
		}
	}
}

impl Display for GeometryKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for GeometryKind {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(GeometryKind::from_tag(s))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("Point", GeometryKind::Point)]
	#[case("LineString", GeometryKind::LineString)]
	#[case("Polygon", GeometryKind::Polygon)]
	#[case("MultiPolygon", GeometryKind::Other)]
	#[case("point", GeometryKind::Other)]
	fn from_tag(#[case] tag: &str, #[case] expected: GeometryKind) {
		assert_eq!(GeometryKind::from_tag(tag), expected);
	}

	#[test]
	fn display() {
		assert_eq!(GeometryKind::LineString.to_string(), "LineString");
	}

	#[test]
	fn parse() {
		assert_eq!("Polygon".parse::<GeometryKind>(), Ok(GeometryKind::Polygon));
		assert_eq!("GeometryCollection".parse::<GeometryKind>(), Ok(GeometryKind::Other));
	}
}
