use super::{EARTH_RADIUS, Units};
use crate::{GeoFeature, Geometry, PolygonGeometry, Position, RingGeometry};
use anyhow::{Result, bail, ensure};

/// Position reached by travelling `distance` meters from `origin` along the great
/// circle with initial `bearing` (degrees clockwise from north).
#[must_use]
pub fn destination(origin: &Position, distance: f64, bearing: f64) -> Position {
	let delta = distance / EARTH_RADIUS;
	let theta = bearing.to_radians();
	let phi1 = origin.y().to_radians();
	let lambda1 = origin.x().to_radians();

	let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
	let lambda2 =
		lambda1 + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

	Position::new(lambda2.to_degrees(), phi2.to_degrees())
}

/// Closed ring approximating a geodesic circle of `radius` around `center`.
///
/// The ring has `steps` vertices plus the closing position. Returns `None` when the
/// construction degenerates: non-finite coordinates or fewer than 3 distinct vertices.
pub fn circle_ring(center: &Position, radius: f64, units: Units, steps: u32) -> Result<Option<RingGeometry>> {
	ensure!(
		radius.is_finite() && radius > 0.0,
		"buffer radius must be a positive number, found {radius}"
	);
	ensure!(steps >= 3, "buffer needs at least 3 steps, found {steps}");

	let meters = units.to_meters(radius);
	let mut positions: Vec<Position> = (0..steps)
		.map(|step| destination(center, meters, -360.0 * f64::from(step) / f64::from(steps)))
		.collect();

	if positions.iter().any(|p| !p.is_finite()) {
		log::debug!("buffer around {center:?} produced non-finite coordinates");
		return Ok(None);
	}
	positions.push(positions[0]);

	let ring = RingGeometry(positions);
	if ring.distinct_vertex_count() < 3 {
		log::debug!("buffer around {center:?} with radius {radius} {units} collapsed");
		return Ok(None);
	}
	Ok(Some(ring))
}

/// Buffers a Point feature into a Polygon feature carrying the same properties.
pub fn point_buffer(point: &GeoFeature, radius: f64, units: Units, steps: u32) -> Result<Option<GeoFeature>> {
	let center = match &point.geometry {
		Geometry::Point(p) => p.0,
		other => bail!("buffer requires a Point feature, found {}", other.type_name()),
	};

	Ok(circle_ring(&center, radius, units, steps)?.map(|ring| {
		let mut feature = GeoFeature::new(Geometry::Polygon(PolygonGeometry(vec![ring])));
		feature.set_properties(point.properties.clone());
		feature
	}))
}
