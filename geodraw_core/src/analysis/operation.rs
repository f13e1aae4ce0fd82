use anyhow::{Error, Result, bail};
use geodraw_geometry::GeometryKind;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// The analysis operations offered for the active selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
	Buffer,
	Distance,
	Area,
	Centroid,
}

impl Operation {
	pub const ALL: [Operation; 4] = [
		Operation::Buffer,
		Operation::Distance,
		Operation::Area,
		Operation::Centroid,
	];

	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Operation::Buffer => "buffer",
			Operation::Distance => "distance",
			Operation::Area => "area",
			Operation::Centroid => "centroid",
		}
	}

	/// Title of the result panel.
	#[must_use]
	pub fn title(&self) -> &'static str {
		match self {
			Operation::Buffer => "Point Buffer",
			Operation::Distance => "Line Distance",
			Operation::Area => "Polygon Area",
			Operation::Centroid => "Centroid",
		}
	}

	/// Geometry kinds the active selection must have.
	#[must_use]
	pub fn required_kinds(&self) -> &'static [GeometryKind] {
		match self {
			Operation::Buffer => &[GeometryKind::Point],
			Operation::Distance => &[GeometryKind::LineString],
			Operation::Area => &[GeometryKind::Polygon],
			Operation::Centroid => &[GeometryKind::Polygon, GeometryKind::LineString],
		}
	}

	/// Whether the trigger of this operation is enabled for the active kind.
	#[must_use]
	pub fn is_enabled_for(&self, kind: Option<GeometryKind>) -> bool {
		kind.is_some_and(|kind| self.required_kinds().contains(&kind))
	}
}

impl FromStr for Operation {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Ok(match s {
			"buffer" => Operation::Buffer,
			"distance" => Operation::Distance,
			"area" => Operation::Area,
			"centroid" => Operation::Centroid,
			_ => bail!("unknown operation '{s}', expected one of: buffer, distance, area, centroid"),
		})
	}
}

impl Display for Operation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Enabled state of every operation trigger, derived from the active kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TriggerStates {
	pub buffer: bool,
	pub distance: bool,
	pub area: bool,
	pub centroid: bool,
}

impl TriggerStates {
	#[must_use]
	pub fn for_kind(kind: Option<GeometryKind>) -> Self {
		Self {
			buffer: Operation::Buffer.is_enabled_for(kind),
			distance: Operation::Distance.is_enabled_for(kind),
			area: Operation::Area.is_enabled_for(kind),
			centroid: Operation::Centroid.is_enabled_for(kind),
		}
	}
}
