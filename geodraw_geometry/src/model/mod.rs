mod feature;
mod geometry;
mod kind;
mod position;
mod properties;
mod types;

pub use feature::*;
pub use geometry::*;
pub use kind::*;
pub use position::*;
pub use properties::*;
pub use types::*;
