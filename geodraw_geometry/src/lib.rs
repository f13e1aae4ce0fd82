//! Geometry model, input contracts and measurements for map drawing sessions.
//!
//! The crate has three layers:
//! - [`model`]: the typed GeoJSON-like model (positions, geometries, features),
//! - [`contract`]: tolerant preprocessing plus ordered structural validation of raw JSON input,
//! - [`measure`]: pure spherical measurements (area, distance, buffer, centroid).

pub mod contract;
mod error;
pub mod measure;
pub mod model;

pub use contract::*;
pub use error::*;
pub use measure::*;
pub use model::*;
