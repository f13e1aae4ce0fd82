//! Pure spherical measurements over validated geometries.
//!
//! Every operation treats the earth as a sphere of radius [`EARTH_RADIUS`] meters.
//! The functions have no side effects; [`MeasurementEngine`] bundles them behind a
//! trait so callers can share one implementation or substitute a test double.

mod area;
mod buffer;
mod centroid;
mod distance;
mod engine;
mod units;

pub use area::*;
pub use buffer::*;
pub use centroid::*;
pub use distance::*;
pub use engine::*;
pub use units::*;

/// Mean earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_371_008.8;
