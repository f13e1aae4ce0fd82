use crate::{ToolArgs, ToolTrait, schema};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use geodraw_geometry::{FeatureContract, MeasurementEngine, Units};
use serde_json::{Value, json};
use std::sync::Arc;

/// `createPointBuffer(point, radius, units?)` → `{"bufferFeature": <Polygon feature>}`
pub struct CreatePointBuffer {
	engine: Arc<dyn MeasurementEngine>,
	default_units: Units,
}

impl CreatePointBuffer {
	pub fn new(engine: Arc<dyn MeasurementEngine>, default_units: Units) -> Self {
		Self { engine, default_units }
	}
}

#[async_trait]
impl ToolTrait for CreatePointBuffer {
	fn name(&self) -> &'static str {
		"createPointBuffer"
	}

	fn description(&self) -> &'static str {
		"Creates a buffer around a GeoJSON Point feature."
	}

	fn parameters(&self) -> Value {
		schema::object(
			json!({
				"point": schema::feature(FeatureContract::Point),
				"radius": {
					"type": "number",
					"exclusiveMinimum": 0,
					"description": "The buffer radius (a positive number)."
				},
				"units": schema::units(self.default_units, "the radius"),
			}),
			&["point", "radius"],
		)
	}

	async fn run(&self, args: &ToolArgs) -> Result<Value> {
		let point = args.feature("point", FeatureContract::Point)?;
		let radius = args.positive_number("radius")?;
		let units = args.units("units", self.default_units)?;
		let buffer = self
			.engine
			.buffer(&point, radius, units)?
			.ok_or_else(|| anyhow!("Buffer creation resulted in undefined feature."))?;
		Ok(json!({ "bufferFeature": buffer.to_json() }))
	}
}
