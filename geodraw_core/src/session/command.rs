use crate::{analysis::Operation, selection::DrawEvent};
use anyhow::{Context, Result, anyhow};
use geodraw_geometry::Units;
use serde::Deserialize;
use std::io::BufRead;

/// One entry of the session queue.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum SessionCommand {
	/// A draw toolkit event.
	Draw { event: DrawEvent },

	/// An analysis trigger for the active selection.
	Analyze {
		operation: Operation,
		#[serde(default)]
		radius: Option<f64>,
		#[serde(default)]
		units: Option<Units>,
	},

	/// The user closed the result panel.
	Dismiss,

	/// A geocoding result to show on the map.
	FitBounds { bbox: Vec<f64> },
}

impl SessionCommand {
	#[must_use]
	pub fn analyze(operation: Operation) -> Self {
		SessionCommand::Analyze {
			operation,
			radius: None,
			units: None,
		}
	}

	/// Short name used in reports and logs.
	#[must_use]
	pub fn name(&self) -> String {
		match self {
			SessionCommand::Draw { event } => event.name().to_string(),
			SessionCommand::Analyze { operation, .. } => format!("analyze.{operation}"),
			SessionCommand::Dismiss => "dismiss".to_string(),
			SessionCommand::FitBounds { .. } => "fit_bounds".to_string(),
		}
	}
}

impl From<DrawEvent> for SessionCommand {
	fn from(event: DrawEvent) -> Self {
		SessionCommand::Draw { event }
	}
}

fn process_line(line: std::io::Result<String>, index: usize) -> Option<Result<SessionCommand>> {
	match line {
		Ok(line) if line.trim().is_empty() => None,
		Ok(line) => Some(serde_json::from_str(&line).with_context(|| format!("error in line {}", index + 1))),
		Err(e) => Some(Err(anyhow!("line {}: {}", index + 1, e))),
	}
}

/// Iterates over the commands of a newline-delimited JSON stream.
///
/// Blank lines are skipped; errors name the line they occurred in.
pub fn read_commands(reader: impl BufRead) -> impl Iterator<Item = Result<SessionCommand>> {
	reader
		.lines()
		.enumerate()
		.filter_map(|(index, line)| process_line(line, index))
}
