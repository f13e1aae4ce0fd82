use super::EARTH_RADIUS;
use crate::{GeoFeature, Geometry, PolygonGeometry, RingGeometry};
use anyhow::{Result, bail};

/// Unsigned area of a ring on the sphere, in square meters.
///
/// Uses the spherical excess approximation of Chamberlain and Duquette.
/// Rings with fewer than 3 distinct vertices have no area.
///
/// The sphere uses the mean earth radius of 6 371 008.8 m, so results run about 0.2% below
/// a computation on the 6 378 137 m equatorial radius.
#[must_use]
pub fn ring_area(ring: &RingGeometry) -> f64 {
	if ring.distinct_vertex_count() < 3 {
		return 0.0;
	}
	let Some(mut p2) = ring.0.last() else {
		return 0.0;
	};

	let mut sum = 0.0;
	for p1 in &ring.0 {
		sum += (p1.x() - p2.x()).to_radians() * (p1.y().to_radians().sin() + p2.y().to_radians().sin());
		p2 = p1;
	}
	(sum * EARTH_RADIUS * EARTH_RADIUS / 2.0).abs()
}

/// Area of a polygon in square meters: the exterior ring minus every hole, never negative.
#[must_use]
pub fn polygon_area(polygon: &PolygonGeometry) -> f64 {
	let Some(exterior) = polygon.exterior() else {
		return 0.0;
	};
	let holes: f64 = polygon.interiors().map(ring_area).sum();
	(ring_area(exterior) - holes).max(0.0)
}

/// Area of a Polygon feature in square meters.
pub fn feature_area(feature: &GeoFeature) -> Result<f64> {
	match &feature.geometry {
		Geometry::Polygon(polygon) => Ok(polygon_area(polygon)),
		other => bail!("area requires a Polygon feature, found {}", other.type_name()),
	}
}
