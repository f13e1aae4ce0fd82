use crate::{ToolArgs, ToolTrait, schema};
use anyhow::Result;
use async_trait::async_trait;
use geodraw_geometry::{FeatureContract, MeasurementEngine};
use serde_json::{Value, json};
use std::sync::Arc;

/// `calculateCentroid(feature)` → `{"centroid": <Point feature>}`
pub struct CalculateCentroid {
	engine: Arc<dyn MeasurementEngine>,
}

impl CalculateCentroid {
	pub fn new(engine: Arc<dyn MeasurementEngine>) -> Self {
		Self { engine }
	}
}

#[async_trait]
impl ToolTrait for CalculateCentroid {
	fn name(&self) -> &'static str {
		"calculateCentroid"
	}

	fn description(&self) -> &'static str {
		"Calculates the centroid of a GeoJSON feature (e.g., Polygon, LineString)."
	}

	fn parameters(&self) -> Value {
		schema::object(
			json!({ "feature": schema::feature(FeatureContract::Any) }),
			&["feature"],
		)
	}

	async fn run(&self, args: &ToolArgs) -> Result<Value> {
		let feature = args.feature("feature", FeatureContract::Any)?;
		let centroid = self.engine.centroid(&feature)?;
		Ok(json!({ "centroid": centroid.to_json() }))
	}
}
