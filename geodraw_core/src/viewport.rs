//! Fit-to-bounds requests for the map renderer.
//!
//! The geocoding collaborator delivers an already-resolved bounding box. It is checked,
//! combined with the configured padding and zoom limit, and handed to a [`MapHandle`].

use crate::config::ViewportConfig;
use anyhow::{Context, Result, ensure};
use serde_json::{Value, json};
use std::fmt::Debug;

/// A bounding box of `[west, south, east, north]` in degrees.
///
/// Ranges are not clamped; only the ordering of the edges is checked.
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl GeoBBox {
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<GeoBBox> {
		GeoBBox {
			x_min,
			y_min,
			x_max,
			y_max,
		}
		.checked()
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	fn checked(self) -> Result<Self> {
		ensure!(
			self.as_array().iter().all(|v| v.is_finite()),
			"bounding box values must be finite numbers"
		);
		ensure!(
			self.x_min <= self.x_max,
			"x_min ({}) must be <= x_max ({})",
			self.x_min,
			self.x_max
		);
		ensure!(
			self.y_min <= self.y_max,
			"y_min ({}) must be <= y_max ({})",
			self.y_min,
			self.y_max
		);
		Ok(self)
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"GeoBBox({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}

impl TryFrom<&[f64]> for GeoBBox {
	type Error = anyhow::Error;

	fn try_from(input: &[f64]) -> Result<Self> {
		ensure!(
			input.len() == 4,
			"bounding box must have 4 values, found {}",
			input.len()
		);
		GeoBBox::new(input[0], input[1], input[2], input[3])
	}
}

impl TryFrom<Vec<f64>> for GeoBBox {
	type Error = anyhow::Error;

	fn try_from(input: Vec<f64>) -> Result<Self> {
		GeoBBox::try_from(input.as_slice())
	}
}

/// A request to move the map so that `bounds` is visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportRequest {
	pub bounds: GeoBBox,
	pub padding: u32,
	pub max_zoom: u8,
}

impl ViewportRequest {
	/// Builds a request from a resolved `[west, south, east, north]` box.
	pub fn from_bbox(bbox: &[f64], config: &ViewportConfig) -> Result<Self> {
		let bounds = GeoBBox::try_from(bbox).context("could not determine location bounds")?;
		Ok(Self {
			bounds,
			padding: config.padding,
			max_zoom: config.max_zoom,
		})
	}

	#[must_use]
	pub fn to_json(&self) -> Value {
		json!({
			"bounds": self.bounds.as_array(),
			"padding": self.padding,
			"maxZoom": self.max_zoom,
		})
	}
}

/// The renderer's side of viewport changes.
pub trait MapHandle {
	fn fit_bounds(&mut self, request: &ViewportRequest) -> Result<()>;
}

/// A [`MapHandle`] that remembers the requests it received.
#[derive(Debug, Default)]
pub struct RecordingMap {
	pub requests: Vec<ViewportRequest>,
}

impl MapHandle for RecordingMap {
	fn fit_bounds(&mut self, request: &ViewportRequest) -> Result<()> {
		log::debug!("fit bounds {:?}", request.bounds);
		self.requests.push(*request);
		Ok(())
	}
}
