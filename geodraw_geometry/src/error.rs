use thiserror::Error;

/// Raw input did not match the expected geometry contract.
///
/// Carries the reason for the first violated rule only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid geometry: {reason}")]
pub struct ValidationError {
	pub reason: String,
}

impl ValidationError {
	pub fn new(reason: impl Into<String>) -> Self {
		Self { reason: reason.into() }
	}
}

impl From<anyhow::Error> for ValidationError {
	fn from(error: anyhow::Error) -> Self {
		Self::new(format!("{error:#}"))
	}
}

/// A measurement could not produce a result for otherwise well-formed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("measurement failed: {reason}")]
pub struct MeasurementError {
	pub reason: String,
}

impl MeasurementError {
	pub fn new(reason: impl Into<String>) -> Self {
		Self { reason: reason.into() }
	}
}

impl From<anyhow::Error> for MeasurementError {
	fn from(error: anyhow::Error) -> Self {
		Self::new(format!("{error:#}"))
	}
}
