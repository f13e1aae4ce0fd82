use super::SessionCommand;
use crate::{
	analysis::{AnalysisArgs, AnalysisDispatcher, AnalysisResult, TriggerStates},
	config::{Config, ViewportConfig},
	selection::{ActiveSelection, DrawEvent, SelectionChange, SelectionTracker},
	viewport::{MapHandle, ViewportRequest},
};
use anyhow::Result;
use geodraw_geometry::{GeometryKind, SphericalEngine};
use serde::Serialize;
use serde_json::Value;
use std::{cell::Cell, collections::VecDeque, rc::Rc, sync::Arc};

/// The state after one processed command.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
	pub command: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub change: Option<SelectionChange>,
	pub active_kind: Option<GeometryKind>,
	pub triggers: TriggerStates,
	pub result: AnalysisResult,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub viewport: Option<Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

/// Owns the selection tracker, the dispatcher and the presentation state.
///
/// Commands are processed strictly in arrival order. Whenever the active feature
/// changes, the result record is cleared before the next command runs, so a result
/// is never shown for a feature that is no longer selected.
pub struct MapSession {
	tracker: SelectionTracker,
	dispatcher: AnalysisDispatcher,
	viewport: ViewportConfig,
	result: AnalysisResult,
	queue: VecDeque<SessionCommand>,
	map: Option<Box<dyn MapHandle>>,
	/// Set by the active-changed listener, consumed when the result is invalidated.
	stale: Rc<Cell<bool>>,
}

impl MapSession {
	#[must_use]
	pub fn new(config: &Config) -> Self {
		let engine = Arc::new(SphericalEngine::new(config.buffer.steps));
		Self::with_dispatcher(AnalysisDispatcher::new(engine, config.analysis), config.viewport)
	}

	#[must_use]
	pub fn with_dispatcher(dispatcher: AnalysisDispatcher, viewport: ViewportConfig) -> Self {
		let stale = Rc::new(Cell::new(false));
		let mut tracker = SelectionTracker::new();
		let flag = Rc::clone(&stale);
		tracker.subscribe(move |_| flag.set(true));

		Self {
			tracker,
			dispatcher,
			viewport,
			result: AnalysisResult::hidden(),
			queue: VecDeque::new(),
			map: None,
			stale,
		}
	}

	pub fn attach_map(&mut self, map: Box<dyn MapHandle>) {
		self.map = Some(map);
	}

	/// Registers an additional active-changed listener.
	pub fn subscribe(&mut self, listener: impl FnMut(&SelectionChange) + 'static) {
		self.tracker.subscribe(listener);
	}

	#[must_use]
	pub fn selection(&self) -> &ActiveSelection {
		self.tracker.selection()
	}

	#[must_use]
	pub fn result(&self) -> &AnalysisResult {
		&self.result
	}

	#[must_use]
	pub fn triggers(&self) -> TriggerStates {
		TriggerStates::for_kind(self.selection().kind())
	}

	pub fn enqueue(&mut self, command: impl Into<SessionCommand>) {
		self.queue.push_back(command.into());
	}

	#[must_use]
	pub fn pending(&self) -> usize {
		self.queue.len()
	}

	/// Processes the oldest queued command.
	pub fn process_next(&mut self) -> Option<StepReport> {
		let command = self.queue.pop_front()?;
		Some(self.process(command))
	}

	/// Drains the queue.
	pub fn run(&mut self) -> Vec<StepReport> {
		std::iter::from_fn(|| self.process_next()).collect()
	}

	/// Enqueues `command` and processes the queue up to and including it.
	pub fn handle(&mut self, command: impl Into<SessionCommand>) -> Vec<StepReport> {
		self.enqueue(command);
		self.run()
	}

	fn process(&mut self, command: SessionCommand) -> StepReport {
		let name = command.name();
		log::debug!("processing {name}");

		let mut change = None;
		let mut viewport = None;
		let mut error = None;

		match command {
			SessionCommand::Draw { event } => change = self.apply_draw_event(&event),
			SessionCommand::Analyze {
				operation,
				radius,
				units,
			} => {
				let args = AnalysisArgs { radius, units };
				self.result = self.dispatcher.dispatch(operation, self.tracker.selection(), &args);
			}
			SessionCommand::Dismiss => self.result = self.dispatcher.clear(),
			SessionCommand::FitBounds { bbox } => match self.fit_bounds(&bbox) {
				Ok(request) => viewport = Some(request.to_json()),
				Err(e) => {
					log::warn!("{e:#}");
					error = Some(format!("{e:#}"));
				}
			},
		}

		StepReport {
			command: name,
			change,
			active_kind: self.selection().kind(),
			triggers: self.triggers(),
			result: self.result.clone(),
			viewport,
			error,
		}
	}

	fn apply_draw_event(&mut self, event: &DrawEvent) -> Option<SelectionChange> {
		let change = self.tracker.apply(event);
		if self.stale.replace(false) {
			if self.result.is_visible {
				log::debug!("active feature changed, clearing result");
			}
			self.result = self.dispatcher.clear();
		}
		change
	}

	fn fit_bounds(&mut self, bbox: &[f64]) -> Result<ViewportRequest> {
		let request = ViewportRequest::from_bbox(bbox, &self.viewport)?;
		if let Some(map) = self.map.as_mut() {
			map.fit_bounds(&request)?;
		}
		Ok(request)
	}
}

impl Default for MapSession {
	fn default() -> Self {
		Self::new(&Config::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		analysis::{AnalysisValue, Operation},
		selection::ChangeCause,
		viewport::RecordingMap,
	};
	use anyhow::bail;
	use geodraw_geometry::{GeoFeature, Geometry};
	use pretty_assertions::assert_eq;
	use std::{cell::RefCell, rc::Rc};

	fn polygon(id: &str) -> GeoFeature {
		GeoFeature::new(Geometry::new_polygon(&[[[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]]])).with_id(id)
	}

	fn point(id: &str) -> GeoFeature {
		GeoFeature::new(Geometry::new_point([13.4, 52.5])).with_id(id)
	}

	#[test]
	fn deleting_active_feature_hides_result() {
		let mut session = MapSession::default();
		session.handle(DrawEvent::create(&polygon("p")));
		session.handle(SessionCommand::analyze(Operation::Area));
		assert!(session.result().is_visible);

		let reports = session.handle(DrawEvent::delete("p"));
		assert_eq!(reports.len(), 1);
		assert_eq!(reports[0].change.as_ref().unwrap().cause, ChangeCause::Deleted);
		assert!(session.selection().is_empty());
		assert!(!session.result().is_visible);
		assert_eq!(reports[0].result, AnalysisResult::hidden());
	}

	#[test]
	fn new_selection_clears_result_before_next_command() {
		let mut session = MapSession::default();
		session.enqueue(DrawEvent::select(&polygon("p")));
		session.enqueue(SessionCommand::analyze(Operation::Area));
		session.enqueue(DrawEvent::select(&point("q")));
		session.enqueue(SessionCommand::analyze(Operation::Area));
		assert_eq!(session.pending(), 4);

		let reports = session.run();
		assert_eq!(session.pending(), 0);
		assert!(reports[1].result.is_visible);
		assert!(!reports[2].result.is_visible);
		// area is not legal for a point, so the panel stays hidden
		assert!(!reports[3].result.is_visible);
		assert_eq!(reports[3].active_kind, Some(GeometryKind::Point));
		assert!(reports[3].triggers.buffer);
		assert!(!reports[3].triggers.area);
	}

	#[test]
	fn unreadable_selection_hides_result() {
		let mut session = MapSession::default();
		session.handle(DrawEvent::create(&polygon("p")));
		session.handle(SessionCommand::analyze(Operation::Area));
		assert!(session.result().is_visible);

		let reports = session.handle(DrawEvent::SelectionChange {
			features: vec![serde_json::json!({
				"type": "Feature",
				"id": "q",
				"geometry": {"type": "Point", "coordinates": [1]}
			})],
		});
		assert_eq!(reports[0].change.as_ref().unwrap().cause, ChangeCause::Deselected);
		assert!(session.selection().is_empty());
		assert_eq!(reports[0].result, AnalysisResult::hidden());
	}

	#[test]
	fn ignored_event_keeps_result() {
		let mut session = MapSession::default();
		session.handle(DrawEvent::create(&polygon("p")));
		session.handle(SessionCommand::analyze(Operation::Centroid));
		let reports = session.handle(DrawEvent::delete("other"));
		assert_eq!(reports[0].change, None);
		assert!(session.result().is_visible);
	}

	#[test]
	fn dismiss_hides_result() {
		let mut session = MapSession::default();
		session.handle(DrawEvent::create(&point("a")));
		let reports = session.handle(SessionCommand::Analyze {
			operation: Operation::Buffer,
			radius: Some(250.0),
			units: Some(geodraw_geometry::Units::Meters),
		});
		assert_eq!(reports[0].result.value, Some(AnalysisValue::Number(250.0)));
		assert_eq!(reports[0].result.unit.as_deref(), Some("m"));
		session.handle(SessionCommand::Dismiss);
		assert!(!session.result().is_visible);
		assert!(session.selection().feature().is_some());
	}

	#[test]
	fn listeners_see_every_change() {
		let changes = Rc::new(RefCell::new(0));
		let mut session = MapSession::default();
		let counter = Rc::clone(&changes);
		session.subscribe(move |_| *counter.borrow_mut() += 1);
		session.handle(DrawEvent::select(&point("a")));
		session.handle(DrawEvent::select(&point("b")));
		session.handle(DrawEvent::deselect());
		assert_eq!(*changes.borrow(), 3);
	}

	#[test]
	fn fit_bounds_reaches_the_map() {
		struct SharedMap(Rc<RefCell<RecordingMap>>);
		impl MapHandle for SharedMap {
			fn fit_bounds(&mut self, request: &ViewportRequest) -> Result<()> {
				self.0.borrow_mut().fit_bounds(request)
			}
		}

		let map = Rc::new(RefCell::new(RecordingMap::default()));
		let mut session = MapSession::default();
		session.attach_map(Box::new(SharedMap(Rc::clone(&map))));

		let reports = session.handle(SessionCommand::FitBounds {
			bbox: vec![13.0, 52.3, 13.8, 52.7],
		});
		assert_eq!(reports[0].error, None);
		assert_eq!(reports[0].viewport.as_ref().unwrap()["maxZoom"], 18);
		assert_eq!(map.borrow().requests.len(), 1);
	}

	#[test]
	fn fit_bounds_errors_are_reported() {
		struct FailingMap;
		impl MapHandle for FailingMap {
			fn fit_bounds(&mut self, _: &ViewportRequest) -> Result<()> {
				bail!("map not loaded")
			}
		}

		let mut session = MapSession::default();
		let reports = session.handle(SessionCommand::FitBounds { bbox: vec![1.0, 2.0] });
		assert_eq!(
			reports[0].error.as_deref(),
			Some("could not determine location bounds: bounding box must have 4 values, found 2")
		);

		session.attach_map(Box::new(FailingMap));
		let reports = session.handle(SessionCommand::FitBounds {
			bbox: vec![0.0, 0.0, 1.0, 1.0],
		});
		assert_eq!(reports[0].error.as_deref(), Some("map not loaded"));
	}

	#[test]
	fn config_reaches_the_dispatcher() {
		let config = Config::from_string("analysis:\n  buffer_radius: 2\n  buffer_units: meters\n").unwrap();
		let mut session = MapSession::new(&config);
		session.handle(DrawEvent::create(&point("a")));
		let reports = session.handle(SessionCommand::analyze(Operation::Buffer));
		assert_eq!(reports[0].result.display_value(), "2 m");
	}
}
