use crate::{ToolArgs, ToolTrait, schema};
use anyhow::{Result, bail};
use async_trait::async_trait;
use geodraw_geometry::{FeatureContract, GeoFeature, Geometry, MeasurementEngine, Position, Units};
use serde_json::{Value, json};
use std::sync::Arc;

/// `calculateDistance(point1, point2, units?)` → `{"distance": <number>, "unit": <units>}`
pub struct CalculateDistance {
	engine: Arc<dyn MeasurementEngine>,
	default_units: Units,
}

impl CalculateDistance {
	pub fn new(engine: Arc<dyn MeasurementEngine>, default_units: Units) -> Self {
		Self { engine, default_units }
	}
}

fn position(feature: &GeoFeature) -> Result<Position> {
	match &feature.geometry {
		Geometry::Point(point) => Ok(point.0),
		other => bail!("expected a Point, found {}", other.type_name()),
	}
}

#[async_trait]
impl ToolTrait for CalculateDistance {
	fn name(&self) -> &'static str {
		"calculateDistance"
	}

	fn description(&self) -> &'static str {
		"Calculates the distance between two GeoJSON Point features."
	}

	fn parameters(&self) -> Value {
		schema::object(
			json!({
				"point1": schema::feature(FeatureContract::Point),
				"point2": schema::feature(FeatureContract::Point),
				"units": schema::units(self.default_units, "distance calculation"),
			}),
			&["point1", "point2"],
		)
	}

	async fn run(&self, args: &ToolArgs) -> Result<Value> {
		let point1 = args.feature("point1", FeatureContract::Point)?;
		let point2 = args.feature("point2", FeatureContract::Point)?;
		let units = args.units("units", self.default_units)?;
		let distance = self
			.engine
			.distance(&position(&point1)?, &position(&point2)?, units)?;
		Ok(json!({ "distance": distance, "unit": units }))
	}
}
