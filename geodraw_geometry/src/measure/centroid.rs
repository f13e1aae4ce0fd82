use crate::{GeoFeature, Geometry, Position};
use anyhow::{Result, ensure};

/// Arithmetic mean of the vertices of any feature, as a Point feature without properties.
///
/// Ring closing positions are not counted twice. For unrecognized geometry kinds every
/// numeric position found in the coordinate payload is averaged.
pub fn centroid(feature: &GeoFeature) -> Result<GeoFeature> {
	let vertices = feature.geometry.vertices();
	ensure!(
		!vertices.is_empty(),
		"cannot compute the centroid of a {} without positions",
		feature.geometry.type_name()
	);

	let (mut x, mut y, mut count) = (0.0, 0.0, 0.0);
	for vertex in &vertices {
		x += vertex.x();
		y += vertex.y();
		count += 1.0;
	}
	Ok(GeoFeature::new(Geometry::new_point(Position::new(x / count, y / count))))
}
