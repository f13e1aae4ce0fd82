use super::preprocess;
use crate::{
	FeatureId, GeoFeature, GeoProperties, Geometry, GeometryKind, LineStringGeometry, PointGeometry, PolygonGeometry,
	Position, RingGeometry, ValidationError,
};
use anyhow::{Context, Result, anyhow, bail, ensure};
use serde_json::Value;
use std::fmt::Display;

/// The structural contract a raw feature argument must satisfy.
///
/// `Point`, `LineString` and `Polygon` accept exactly that geometry kind.
/// `Any` accepts the three known kinds (validated strictly) and any
/// unrecognized tag, whose coordinates are kept as opaque JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureContract {
	Point,
	LineString,
	Polygon,
	Any,
}

impl FeatureContract {
	#[must_use]
	pub fn expected_kind(&self) -> Option<GeometryKind> {
		match self {
			FeatureContract::Point => Some(GeometryKind::Point),
			FeatureContract::LineString => Some(GeometryKind::LineString),
			FeatureContract::Polygon => Some(GeometryKind::Polygon),
			FeatureContract::Any => None,
		}
	}

	/// Human-readable description, used in tool parameter schemas.
	#[must_use]
	pub fn describe(&self) -> &'static str {
		match self {
			FeatureContract::Point => "A GeoJSON Point Feature object. Can be a stringified JSON.",
			FeatureContract::LineString => "A GeoJSON LineString Feature object. Can be a stringified JSON.",
			FeatureContract::Polygon => "A GeoJSON Polygon Feature object. Can be a stringified JSON.",
			FeatureContract::Any => {
				"A GeoJSON Feature (e.g., Point, Polygon, LineString). Can be a stringified JSON."
			}
		}
	}

	/// Preprocesses `raw` and validates it against this contract.
	///
	/// Checks run in order (feature tag, geometry tag, coordinates, properties, id)
	/// and the first violated rule is reported.
	pub fn validate(&self, raw: Value) -> Result<GeoFeature, ValidationError> {
		let value = preprocess(raw);
		self.check_feature(&value, true).map_err(ValidationError::from)
	}

	/// Like [`validate`](Self::validate), but skips the arity rules of the geometry
	/// (position count, ring closure).
	///
	/// Used for features delivered by the draw toolkit. They are verified again
	/// before anything is measured.
	pub fn read(&self, raw: Value) -> Result<GeoFeature, ValidationError> {
		let value = preprocess(raw);
		self.check_feature(&value, false).map_err(ValidationError::from)
	}

	fn check_feature(&self, value: &Value, verify: bool) -> Result<GeoFeature> {
		let object = value
			.as_object()
			.ok_or_else(|| anyhow!("expected a GeoJSON Feature object, found {}", json_type(value)))?;

		check_type(object.get("type"), "Feature", "feature")?;

		let geometry = object
			.get("geometry")
			.ok_or_else(|| anyhow!("feature is missing 'geometry'"))?;
		let geometry = self.check_geometry(geometry, verify)?;

		let properties = parse_properties(object.get("properties"))?;
		let id = parse_id(object.get("id"))?;

		Ok(GeoFeature {
			id,
			geometry,
			properties,
		})
	}

	fn check_geometry(&self, value: &Value, verify: bool) -> Result<Geometry> {
		let object = value
			.as_object()
			.ok_or_else(|| anyhow!("geometry must be an object, found {}", json_type(value)))?;

		let tag = match object.get("type") {
			Some(Value::String(tag)) => tag.as_str(),
			Some(other) => bail!("geometry type must be a string, found {}", json_type(other)),
			None => bail!("geometry must have a type"),
		};
		let kind = GeometryKind::from_tag(tag);
		if let Some(expected) = self.expected_kind() {
			ensure!(kind == expected, "geometry type must be '{expected}', found '{tag}'");
		}

		let coordinates = object.get("coordinates");
		let geometry = match kind {
			GeometryKind::Point => Geometry::Point(PointGeometry(parse_position(required(coordinates)?)?)),
			GeometryKind::LineString => {
				Geometry::LineString(LineStringGeometry(parse_positions(required(coordinates)?)?))
			}
			GeometryKind::Polygon => Geometry::Polygon(parse_polygon(required(coordinates)?)?),
			GeometryKind::Other => Geometry::new_other(tag, coordinates.cloned().unwrap_or(Value::Null)),
		};
		if verify {
			geometry.verify()?;
		}
		Ok(geometry)
	}
}

impl Display for FeatureContract {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.expected_kind() {
			Some(kind) => write!(f, "{kind} feature"),
			None => f.write_str("feature"),
		}
	}
}

/// Validates a raw argument against `contract`. See [`FeatureContract::validate`].
pub fn validate(raw: Value, contract: FeatureContract) -> Result<GeoFeature, ValidationError> {
	contract.validate(raw)
}

/// Names the JSON type of `value` for error messages, e.g. "an array".
#[must_use]
pub fn json_type(value: &Value) -> &'static str {
	match value {
		Value::Array(_) => "an array",
		Value::Bool(_) => "a boolean",
		Value::Null => "null",
		Value::Number(_) => "a number",
		Value::Object(_) => "an object",
		Value::String(_) => "a string",
	}
}

fn check_type(value: Option<&Value>, name: &str, what: &str) -> Result<()> {
	match value {
		Some(Value::String(tag)) if tag == name => Ok(()),
		Some(Value::String(tag)) => bail!("type must be '{name}', found '{tag}'"),
		Some(other) => bail!("type must be '{name}', found {}", json_type(other)),
		None => bail!("{what} must have a type"),
	}
}

fn required(coordinates: Option<&Value>) -> Result<&Value> {
	coordinates.ok_or_else(|| anyhow!("geometry must have coordinates"))
}

fn parse_position(value: &Value) -> Result<Position> {
	let items = value
		.as_array()
		.ok_or_else(|| anyhow!("position must be an array, found {}", json_type(value)))?;
	ensure!(
		(2..=3).contains(&items.len()),
		"position must have 2 or 3 numbers, found {}",
		items.len()
	);

	let mut numbers = [0.0; 3];
	for (index, item) in items.iter().enumerate() {
		numbers[index] = item
			.as_f64()
			.ok_or_else(|| anyhow!("position must contain only numbers, found {}", json_type(item)))?;
	}

	Ok(if items.len() == 3 {
		Position::new_3d(numbers[0], numbers[1], numbers[2])
	} else {
		Position::new(numbers[0], numbers[1])
	})
}

fn parse_positions(value: &Value) -> Result<Vec<Position>> {
	let items = value
		.as_array()
		.ok_or_else(|| anyhow!("coordinates must be an array of positions, found {}", json_type(value)))?;
	items
		.iter()
		.enumerate()
		.map(|(index, item)| parse_position(item).with_context(|| format!("at position {index}")))
		.collect()
}

fn parse_polygon(value: &Value) -> Result<PolygonGeometry> {
	let rings = value
		.as_array()
		.ok_or_else(|| anyhow!("coordinates must be an array of linear rings, found {}", json_type(value)))?;
	let rings = rings
		.iter()
		.enumerate()
		.map(|(index, ring)| {
			parse_positions(ring)
				.map(RingGeometry)
				.with_context(|| format!("in ring {index}"))
		})
		.collect::<Result<Vec<_>>>()?;
	Ok(PolygonGeometry(rings))
}

fn parse_properties(value: Option<&Value>) -> Result<GeoProperties> {
	match value {
		None | Some(Value::Null) => Ok(GeoProperties::new()),
		Some(Value::Object(map)) => Ok(GeoProperties::from(map.clone())),
		Some(other) => bail!("properties must be an object or null, found {}", json_type(other)),
	}
}

fn parse_id(value: Option<&Value>) -> Result<Option<FeatureId>> {
	match value {
		None | Some(Value::Null) => Ok(None),
		Some(value) => FeatureId::from_json(value)
			.map(Some)
			.ok_or_else(|| anyhow!("id must be a string or a number, found {}", json_type(value))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!([1]), "an array")]
	#[case(json!(true), "a boolean")]
	#[case(Value::Null, "null")]
	#[case(json!(1.5), "a number")]
	#[case(json!({}), "an object")]
	#[case(json!("x"), "a string")]
	fn json_type_names(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(json_type(&value), expected);
	}

	fn point_feature() -> Value {
		json!({"type": "Feature", "geometry": {"type": "Point", "coordinates": [13.4, 52.5]}, "properties": {}})
	}

	fn square_feature() -> Value {
		json!({
			"type": "Feature",
			"geometry": {"type": "Polygon", "coordinates": [[[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]]]}
		})
	}

	fn reason(contract: FeatureContract, raw: Value) -> String {
		contract.validate(raw).unwrap_err().reason
	}

	#[test]
	fn valid_point() {
		let feature = FeatureContract::Point.validate(point_feature()).unwrap();
		assert_eq!(feature.geometry, Geometry::new_point([13.4, 52.5]));
		assert!(feature.properties.is_empty());
		assert_eq!(feature.id, None);
	}

	#[test]
	fn string_and_structured_input_are_equivalent() {
		let structured = FeatureContract::Point.validate(point_feature()).unwrap();
		let encoded = FeatureContract::Point
			.validate(Value::from(point_feature().to_string()))
			.unwrap();
		assert_eq!(structured, encoded);
	}

	#[test]
	fn altitude_is_preserved() {
		let raw = json!({"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 2, 3]}});
		let feature = FeatureContract::Point.validate(raw).unwrap();
		assert_eq!(feature.geometry, Geometry::new_point(Position::new_3d(1.0, 2.0, 3.0)));
	}

	#[test]
	fn polygon_without_properties() {
		let feature = FeatureContract::Polygon.validate(square_feature()).unwrap();
		assert_eq!(feature.kind(), GeometryKind::Polygon);
	}

	#[test]
	fn id_is_normalised() {
		let mut raw = point_feature();
		raw["id"] = json!(7);
		assert_eq!(FeatureContract::Point.validate(raw).unwrap().id, Some(FeatureId::from("7")));
	}

	#[rstest]
	#[case(json!("not json {"), "expected a GeoJSON Feature object, found a string")]
	#[case(json!([1, 2]), "expected a GeoJSON Feature object, found an array")]
	#[case(json!({"geometry": {}}), "feature must have a type")]
	#[case(json!({"type": "FeatureCollection"}), "type must be 'Feature', found 'FeatureCollection'")]
	#[case(json!({"type": "Feature"}), "feature is missing 'geometry'")]
	#[case(json!({"type": "Feature", "geometry": null}), "geometry must be an object, found null")]
	#[case(json!({"type": "Feature", "geometry": {"coordinates": [1, 2]}}), "geometry must have a type")]
	#[case(
		json!({"type": "Feature", "geometry": {"type": "Polygon", "coordinates": []}}),
		"geometry type must be 'Point', found 'Polygon'"
	)]
	#[case(json!({"type": "Feature", "geometry": {"type": "Point"}}), "geometry must have coordinates")]
	#[case(
		json!({"type": "Feature", "geometry": {"type": "Point", "coordinates": [1]}}),
		"position must have 2 or 3 numbers, found 1"
	)]
	#[case(
		json!({"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 2, 3, 4]}}),
		"position must have 2 or 3 numbers, found 4"
	)]
	#[case(
		json!({"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, "2"]}}),
		"position must contain only numbers, found a string"
	)]
	#[case(
		json!({"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 2]}, "properties": [1]}),
		"properties must be an object or null, found an array"
	)]
	fn point_contract_violations(#[case] raw: Value, #[case] expected: &str) {
		assert_eq!(reason(FeatureContract::Point, raw), expected);
	}

	#[test]
	fn geometry_tag_is_checked_before_coordinates() {
		let raw = json!({"type": "Feature", "geometry": {"type": "LineString", "coordinates": "garbage"}});
		assert_eq!(
			reason(FeatureContract::Point, raw),
			"geometry type must be 'Point', found 'LineString'"
		);
	}

	#[test]
	fn line_string_needs_two_positions() {
		let raw = json!({"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0, 0]]}});
		assert_eq!(
			reason(FeatureContract::LineString, raw),
			"LineString must have at least 2 positions, found 1"
		);
	}

	#[test]
	fn ring_must_be_closed() {
		let raw = json!({
			"type": "Feature",
			"geometry": {"type": "Polygon", "coordinates": [[[0, 0], [0, 1], [1, 1], [1, 0]]]}
		});
		assert_eq!(
			reason(FeatureContract::Polygon, raw),
			"in ring 0: ring must be closed (first and last position must be equal)"
		);
	}

	#[test]
	fn ring_needs_four_positions() {
		let raw = json!({
			"type": "Feature",
			"geometry": {"type": "Polygon", "coordinates": [[[0, 0], [0, 1], [0, 0]]]}
		});
		assert_eq!(
			reason(FeatureContract::Polygon, raw),
			"in ring 0: ring must have at least 4 positions, found 3"
		);
	}

	#[test]
	fn bad_position_inside_ring_reports_path() {
		let raw = json!({
			"type": "Feature",
			"geometry": {"type": "Polygon", "coordinates": [[[0, 0], [0], [1, 1], [0, 0]]]}
		});
		assert_eq!(
			reason(FeatureContract::Polygon, raw),
			"in ring 0: at position 1: position must have 2 or 3 numbers, found 1"
		);
	}

	#[test]
	fn polygon_needs_a_ring() {
		let raw = json!({"type": "Feature", "geometry": {"type": "Polygon", "coordinates": []}});
		assert_eq!(reason(FeatureContract::Polygon, raw), "Polygon must have at least one ring");
	}

	#[test]
	fn null_properties_are_accepted() {
		let mut raw = point_feature();
		raw["properties"] = Value::Null;
		assert!(FeatureContract::Point.validate(raw).is_ok());
	}

	#[rstest]
	#[case(json!({"type": "Point", "coordinates": [1, 2]}), GeometryKind::Point)]
	#[case(json!({"type": "LineString", "coordinates": [[1, 2], [3, 4]]}), GeometryKind::LineString)]
	#[case(json!({"type": "Polygon", "coordinates": [[[0, 0], [0, 1], [1, 1], [0, 0]]]}), GeometryKind::Polygon)]
	#[case(json!({"type": "MultiPoint", "coordinates": [[1, 2], [3, 4]]}), GeometryKind::Other)]
	#[case(json!({"type": "Custom"}), GeometryKind::Other)]
	fn any_contract_accepts(#[case] geometry: Value, #[case] kind: GeometryKind) {
		let raw = json!({"type": "Feature", "geometry": geometry, "properties": null});
		assert_eq!(FeatureContract::Any.validate(raw).unwrap().kind(), kind);
	}

	#[test]
	fn any_contract_validates_known_kinds_strictly() {
		let raw = json!({"type": "Feature", "geometry": {"type": "Point", "coordinates": [1]}});
		assert_eq!(
			reason(FeatureContract::Any, raw),
			"position must have 2 or 3 numbers, found 1"
		);
	}

	#[test]
	fn other_keeps_raw_coordinates() {
		let raw = json!({"type": "Feature", "geometry": {"type": "MultiPoint", "coordinates": [[1, 2], [3, 4]]}});
		let feature = validate(raw, FeatureContract::Any).unwrap();
		assert_eq!(feature.geometry, Geometry::new_other("MultiPoint", json!([[1, 2], [3, 4]])));
	}

	#[test]
	fn read_skips_arity_rules() {
		let raw = json!({"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0, 0]]}});
		let feature = FeatureContract::Any.read(raw.clone()).unwrap();
		assert_eq!(feature.kind(), GeometryKind::LineString);
		assert!(FeatureContract::Any.validate(raw).is_err());
	}

	#[test]
	fn read_still_checks_shape() {
		let raw = json!({"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0]]}});
		assert_eq!(
			FeatureContract::Any.read(raw).unwrap_err().reason,
			"at position 0: position must have 2 or 3 numbers, found 1"
		);
	}

	#[test]
	fn display() {
		assert_eq!(FeatureContract::Polygon.to_string(), "Polygon feature");
		assert_eq!(FeatureContract::Any.to_string(), "feature");
	}
}
