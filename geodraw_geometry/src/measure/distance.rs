use super::{EARTH_RADIUS, Units};
use crate::Position;

/// Great-circle distance between two positions in meters (haversine formula).
///
/// The deltas enter as absolute values, so the result is symmetric and exactly zero
/// for identical positions. Altitude is ignored.
#[must_use]
pub fn haversine_distance(a: &Position, b: &Position) -> f64 {
	let phi1 = a.y().to_radians();
	let phi2 = b.y().to_radians();
	let d_phi = (b.y() - a.y()).abs().to_radians();
	let d_lambda = (b.x() - a.x()).abs().to_radians();

	let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
	2.0 * EARTH_RADIUS * h.sqrt().min(1.0).asin()
}

/// Great-circle distance between two positions in the given units.
#[must_use]
pub fn distance(a: &Position, b: &Position, units: Units) -> f64 {
	units.from_meters(haversine_distance(a, b))
}
