use super::{Units, centroid, distance, feature_area, point_buffer};
use crate::{GeoFeature, MeasurementError, Position};

/// The measurement operations shared by every invocation path.
///
/// Implementations must be pure: the same input always yields the same output.
pub trait MeasurementEngine: Send + Sync {
	/// Area of a Polygon feature in square meters.
	fn area(&self, polygon: &GeoFeature) -> Result<f64, MeasurementError>;

	/// Great-circle distance between two positions.
	fn distance(&self, from: &Position, to: &Position, units: Units) -> Result<f64, MeasurementError>;

	/// Polygon approximating a disk around a Point feature; `None` if the construction degenerates.
	fn buffer(&self, point: &GeoFeature, radius: f64, units: Units) -> Result<Option<GeoFeature>, MeasurementError>;

	/// Mean position of any feature.
	fn centroid(&self, feature: &GeoFeature) -> Result<GeoFeature, MeasurementError>;
}

/// [`MeasurementEngine`] on a spherical earth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SphericalEngine {
	buffer_steps: u32,
}

impl SphericalEngine {
	pub const DEFAULT_BUFFER_STEPS: u32 = 64;

	#[must_use]
	pub fn new(buffer_steps: u32) -> Self {
		Self { buffer_steps }
	}

	#[must_use]
	pub fn buffer_steps(&self) -> u32 {
		self.buffer_steps
	}
}

impl Default for SphericalEngine {
	fn default() -> Self {
		Self::new(Self::DEFAULT_BUFFER_STEPS)
	}
}

impl MeasurementEngine for SphericalEngine {
	fn area(&self, polygon: &GeoFeature) -> Result<f64, MeasurementError> {
		Ok(feature_area(polygon)?)
	}

	fn distance(&self, from: &Position, to: &Position, units: Units) -> Result<f64, MeasurementError> {
		Ok(distance(from, to, units))
	}

	fn buffer(&self, point: &GeoFeature, radius: f64, units: Units) -> Result<Option<GeoFeature>, MeasurementError> {
		Ok(point_buffer(point, radius, units, self.buffer_steps)?)
	}

	fn centroid(&self, feature: &GeoFeature) -> Result<GeoFeature, MeasurementError> {
		Ok(centroid(feature)?)
	}
}
