use anyhow::{Error, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Linear units accepted by distance and buffer operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
	#[default]
	Kilometers,
	Meters,
}

impl Units {
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Units::Kilometers => "kilometers",
			Units::Meters => "meters",
		}
	}

	#[must_use]
	pub fn symbol(&self) -> &'static str {
		match self {
			Units::Kilometers => "km",
			Units::Meters => "m",
		}
	}

	#[must_use]
	pub fn to_meters(&self, value: f64) -> f64 {
		match self {
			Units::Kilometers => value * 1000.0,
			Units::Meters => value,
		}
	}

	#[must_use]
	pub fn from_meters(&self, meters: f64) -> f64 {
		match self {
			Units::Kilometers => meters / 1000.0,
			Units::Meters => meters,
		}
	}
}

impl FromStr for Units {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Ok(match s {
			"kilometers" => Units::Kilometers,
			"meters" => Units::Meters,
			_ => bail!("units must be 'kilometers' or 'meters', found '{s}'"),
		})
	}
}

impl Display for Units {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
