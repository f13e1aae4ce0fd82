use super::{AnalysisResult, AnalysisValue, Operation};
use crate::{AnalysisError, config::AnalysisConfig, selection::ActiveSelection};
use geodraw_geometry::{
	GeoFeature, Geometry, MeasurementEngine, MeasurementError, SphericalEngine, Units, ValidationError,
};
use serde::Deserialize;
use std::sync::Arc;

/// Optional arguments of an analysis request. Missing values fall back to the configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisArgs {
	pub radius: Option<f64>,
	pub units: Option<Units>,
}

/// A successful measurement, before it becomes a presentation record.
#[derive(Clone, Debug, PartialEq)]
pub struct Measured {
	pub value: AnalysisValue,
	pub unit: Option<String>,
	pub overlay: Option<GeoFeature>,
}

/// Runs analysis operations against the active selection.
///
/// [`dispatch`](Self::dispatch) never fails: ineligible requests yield a hidden record,
/// failed measurements a visible record without value.
#[derive(Clone)]
pub struct AnalysisDispatcher {
	engine: Arc<dyn MeasurementEngine>,
	config: AnalysisConfig,
}

impl AnalysisDispatcher {
	pub fn new(engine: Arc<dyn MeasurementEngine>, config: AnalysisConfig) -> Self {
		Self { engine, config }
	}

	#[must_use]
	pub fn config(&self) -> &AnalysisConfig {
		&self.config
	}

	/// Checks legality, validates the geometry and measures.
	pub fn try_dispatch(
		&self,
		operation: Operation,
		selection: &ActiveSelection,
		args: &AnalysisArgs,
	) -> Result<Measured, AnalysisError> {
		let feature = match selection.feature() {
			Some(feature) if operation.is_enabled_for(Some(feature.kind())) => feature,
			_ => {
				return Err(AnalysisError::Ineligible {
					operation,
					required: operation.required_kinds(),
					found: selection.kind(),
				});
			}
		};
		feature.geometry.verify().map_err(ValidationError::from)?;

		let engine = self.engine.as_ref();
		let config = &self.config;
		Ok(match operation {
			Operation::Area => {
				let square_meters = engine.area(feature)?;
				let (value, unit) = if square_meters < 1_000_000.0 {
					(square_meters, "m²")
				} else {
					(square_meters / 1_000_000.0, "km²")
				};
				Measured {
					value: AnalysisValue::Number(config.round(value)),
					unit: Some(unit.to_string()),
					overlay: None,
				}
			}
			Operation::Distance => {
				let Geometry::LineString(line) = &feature.geometry else {
					return Err(ValidationError::new("distance requires a LineString").into());
				};
				let (start, end) = line
					.endpoints()
					.ok_or_else(|| ValidationError::new("LineString has no endpoints"))?;
				let mut units = args.units.unwrap_or(config.distance_units);
				let mut distance = engine.distance(&start, &end, units)?;
				// below one kilometer, report meters
				if units == Units::Kilometers && distance < 1.0 {
					distance = units.to_meters(distance);
					units = Units::Meters;
				}
				Measured {
					value: AnalysisValue::Number(config.round(distance)),
					unit: Some(units.symbol().to_string()),
					overlay: None,
				}
			}
			Operation::Buffer => {
				let radius = args.radius.unwrap_or(config.buffer_radius);
				if !(radius.is_finite() && radius > 0.0) {
					let reason = format!("buffer radius must be a positive number, found {radius}");
					return Err(ValidationError::new(reason).into());
				}
				let units = args.units.unwrap_or(config.buffer_units);
				let buffer = engine
					.buffer(feature, radius, units)?
					.ok_or_else(|| MeasurementError::new("buffer construction degenerated"))?;
				Measured {
					value: AnalysisValue::Number(radius),
					unit: Some(units.symbol().to_string()),
					overlay: Some(buffer),
				}
			}
			Operation::Centroid => {
				let centroid = engine.centroid(feature)?;
				let text = match &centroid.geometry {
					Geometry::Point(point) => format!("{:.6}, {:.6}", point.x(), point.y()),
					other => {
						let reason = format!("centroid is a {}", other.type_name());
						return Err(MeasurementError::new(reason).into());
					}
				};
				Measured {
					value: AnalysisValue::Text(text),
					unit: None,
					overlay: Some(centroid),
				}
			}
		})
	}

	/// Runs `operation` and always returns a displayable record.
	pub fn dispatch(&self, operation: Operation, selection: &ActiveSelection, args: &AnalysisArgs) -> AnalysisResult {
		match self.try_dispatch(operation, selection, args) {
			Ok(measured) => {
				log::debug!("{operation} succeeded: {}", measured.value);
				AnalysisResult::success(
					operation.title(),
					measured.value,
					measured.unit.as_deref(),
					measured.overlay,
				)
			}
			Err(error) if error.is_ineligible() => {
				log::debug!("{error}");
				AnalysisResult::hidden()
			}
			Err(error) => {
				log::warn!("{operation} failed: {error}");
				AnalysisResult::failure(operation.title(), error)
			}
		}
	}

	/// The dismissed record. Idempotent.
	#[must_use]
	pub fn clear(&self) -> AnalysisResult {
		AnalysisResult::hidden()
	}
}

impl Default for AnalysisDispatcher {
	fn default() -> Self {
		Self::new(Arc::new(SphericalEngine::default()), AnalysisConfig::default())
	}
}
