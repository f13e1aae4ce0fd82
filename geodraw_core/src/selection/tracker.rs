use super::{ActiveSelection, ChangeCause, DrawEvent, SelectionChange};
use geodraw_geometry::GeoFeature;

type Listener = Box<dyn FnMut(&SelectionChange)>;

/// Reduces draw toolkit events to the single active selection.
///
/// The tracker is the only writer of the [`ActiveSelection`]. Every transition fires
/// the active-changed notification exactly once, synchronously, before `apply` returns.
/// Events that do not concern the active feature change nothing.
#[derive(Default)]
pub struct SelectionTracker {
	selection: ActiveSelection,
	listeners: Vec<Listener>,
}

impl SelectionTracker {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn selection(&self) -> &ActiveSelection {
		&self.selection
	}

	/// Registers a listener for active-changed notifications.
	pub fn subscribe(&mut self, listener: impl FnMut(&SelectionChange) + 'static) {
		self.listeners.push(Box::new(listener));
	}

	/// Applies one event and returns the notification it fired, if any.
	pub fn apply(&mut self, event: &DrawEvent) -> Option<SelectionChange> {
		match event {
			DrawEvent::Create { .. } => self.replace(event, ChangeCause::Created),
			DrawEvent::SelectionChange { features } if features.is_empty() => self.deselect(),
			DrawEvent::SelectionChange { .. } => self.replace(event, ChangeCause::Selected),
			DrawEvent::Update { .. } => {
				let active_id = self.selection.id()?.clone();
				let updated = event
					.read_features()
					.into_iter()
					.rfind(|feature| feature.id.as_ref() == Some(&active_id))?;
				Some(self.transition(Some(updated), ChangeCause::Updated))
			}
			DrawEvent::Delete { .. } => {
				let active_id = self.selection.id()?;
				if !event.deleted_ids().contains(active_id) {
					return None;
				}
				Some(self.transition(None, ChangeCause::Deleted))
			}
		}
	}

	/// A new selection always supersedes the old one. Without a readable feature the
	/// selection becomes empty.
	fn replace(&mut self, event: &DrawEvent, cause: ChangeCause) -> Option<SelectionChange> {
		match event.read_features().pop() {
			Some(feature) => Some(self.transition(Some(feature), cause)),
			None => {
				log::warn!("{} carries no readable feature, dropping the active selection", event.name());
				self.deselect()
			}
		}
	}

	fn deselect(&mut self) -> Option<SelectionChange> {
		if self.selection.is_empty() {
			log::debug!("deselect without active feature, nothing to do");
			return None;
		}
		Some(self.transition(None, ChangeCause::Deselected))
	}

	fn transition(&mut self, feature: Option<GeoFeature>, cause: ChangeCause) -> SelectionChange {
		self.selection = ActiveSelection::new(feature);
		let change = SelectionChange {
			cause,
			kind: self.selection.kind(),
			id: self.selection.id().cloned(),
		};
		log::debug!(
			"active feature {cause}: kind={:?} id={:?}",
			change.kind,
			change.id
		);
		for listener in &mut self.listeners {
			listener(&change);
		}
		change
	}
}
