use crate::{ToolArgs, ToolTrait, schema};
use anyhow::Result;
use async_trait::async_trait;
use geodraw_geometry::{FeatureContract, MeasurementEngine};
use serde_json::{Value, json};
use std::sync::Arc;

/// `calculatePolygonArea(polygon)` → `{"area": <square meters>}`
pub struct CalculatePolygonArea {
	engine: Arc<dyn MeasurementEngine>,
}

impl CalculatePolygonArea {
	pub fn new(engine: Arc<dyn MeasurementEngine>) -> Self {
		Self { engine }
	}
}

#[async_trait]
impl ToolTrait for CalculatePolygonArea {
	fn name(&self) -> &'static str {
		"calculatePolygonArea"
	}

	fn description(&self) -> &'static str {
		"Calculates the area of a GeoJSON Polygon feature in square meters."
	}

	fn parameters(&self) -> Value {
		schema::object(
			json!({ "polygon": schema::feature(FeatureContract::Polygon) }),
			&["polygon"],
		)
	}

	async fn run(&self, args: &ToolArgs) -> Result<Value> {
		let polygon = args.feature("polygon", FeatureContract::Polygon)?;
		let area = self.engine.area(&polygon)?;
		Ok(json!({ "area": area }))
	}
}
