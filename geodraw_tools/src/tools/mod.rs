//! The four measurement tools.

mod calculate_centroid;
mod calculate_distance;
mod calculate_polygon_area;
mod create_point_buffer;

pub use calculate_centroid::CalculateCentroid;
pub use calculate_distance::CalculateDistance;
pub use calculate_polygon_area::CalculatePolygonArea;
pub use create_point_buffer::CreatePointBuffer;

use crate::ToolTrait;
use geodraw_core::config::ToolsConfig;
use geodraw_geometry::MeasurementEngine;
use std::sync::Arc;

pub fn get_tools(engine: &Arc<dyn MeasurementEngine>, config: &ToolsConfig) -> Vec<Box<dyn ToolTrait>> {
	vec![
		Box::new(CalculatePolygonArea::new(Arc::clone(engine))),
		Box::new(CalculateDistance::new(Arc::clone(engine), config.distance_units)),
		Box::new(CreatePointBuffer::new(Arc::clone(engine), config.buffer_units)),
		Box::new(CalculateCentroid::new(Arc::clone(engine))),
	]
}
