use super::super::Position;
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// Common interface of the geometric primitives.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Checks the arity rules of the geometry, e.g. the number of positions or ring closure.
	/// Returns an error describing the first violated rule.
	fn verify(&self) -> Result<()>;

	/// Converts the geometry into the JSON representation of its coordinates.
	fn to_coord_json(&self) -> Value;

	/// Returns the distinct vertices of the geometry.
	///
	/// The closing position of a ring is skipped, so every vertex is counted once.
	fn vertices(&self) -> Vec<Position>;
}
