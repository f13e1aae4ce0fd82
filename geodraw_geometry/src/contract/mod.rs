//! Structural contracts for raw feature arguments.
//!
//! Raw input may be structured JSON or a JSON-encoded string. It is normalized by
//! [`preprocess`] and then checked against a [`FeatureContract`], producing a typed
//! [`GeoFeature`](crate::GeoFeature) or a [`ValidationError`](crate::ValidationError)
//! naming the first violated rule.

mod preprocess;
mod validate;

pub use preprocess::preprocess;
pub use validate::{FeatureContract, json_type, validate};
