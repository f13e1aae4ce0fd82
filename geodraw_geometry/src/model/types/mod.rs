// Core geometric primitives of the drawing model: `PointGeometry`, `LineStringGeometry`,
// `RingGeometry` and `PolygonGeometry`. They share `GeometryTrait` (validation, vertex
// access and JSON output).

mod linestring;
mod macros;
mod point;
mod polygon;
mod ring;
mod traits;

pub use linestring::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
