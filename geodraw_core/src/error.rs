use crate::analysis::Operation;
use geodraw_geometry::{GeometryKind, MeasurementError, ValidationError};
use thiserror::Error;

/// Why an analysis request did not produce a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
	#[error(transparent)]
	Validation(#[from] ValidationError),

	/// The active selection has the wrong geometry kind (or there is none).
	#[error("{operation} requires a {} feature, found {}", describe_kinds(.required), describe_found(.found.as_ref()))]
	Ineligible {
		operation: Operation,
		required: &'static [GeometryKind],
		found: Option<GeometryKind>,
	},

	#[error(transparent)]
	Measurement(#[from] MeasurementError),
}

impl AnalysisError {
	#[must_use]
	pub fn is_ineligible(&self) -> bool {
		matches!(self, AnalysisError::Ineligible { .. })
	}
}

fn describe_kinds(kinds: &[GeometryKind]) -> String {
	kinds.iter().map(GeometryKind::as_str).collect::<Vec<_>>().join(" or ")
}

fn describe_found(found: Option<&GeometryKind>) -> String {
	found.map_or_else(|| "no selection".to_string(), |kind| kind.to_string())
}
