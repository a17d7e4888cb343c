use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::dataset::EventSet;
use crate::core::event::TimelineEvent;
use crate::core::types::{EventId, GroupId};
use crate::transport::TimelineTransport;

/// Typed events emitted by the rendering widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// Ids of all currently selected items, in widget order.
    Selected(Vec<EventId>),
    /// The widget tentatively removed an item and awaits confirmation.
    RemoveRequested(EventId),
}

/// Empty form placeholder standing in for "no single item selected".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub content: String,
    pub group: Option<GroupId>,
}

impl EventDraft {
    /// Placeholder anchored at `now` with empty display fields.
    #[must_use]
    pub fn empty_at(now: DateTime<Utc>) -> Self {
        Self {
            start: now,
            end: now,
            content: String::new(),
            group: None,
        }
    }
}

/// What the edit form shows: a full record or the empty placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectedEvent {
    Item(TimelineEvent),
    Placeholder(EventDraft),
}

/// Outcome of the two-phase delete protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalDecision {
    /// Backend authorized the delete; the widget finalizes the removal.
    Confirmed,
    /// Backend refused; the widget must restore the item.
    Rejected,
}

impl RemovalDecision {
    #[must_use]
    pub fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

/// Tracks the single selected event, arbitrates widget-proposed deletions
/// against the backend, and owns the add-event form visibility.
///
/// Selection state collapses to two observable shapes: exactly one selected
/// item resolves to its full record; zero or multiple selected items resolve
/// to the empty placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionCoordinator {
    timeline_id: u64,
    selected: Option<TimelineEvent>,
    form_visible: bool,
}

impl SelectionCoordinator {
    #[must_use]
    pub fn new(timeline_id: u64) -> Self {
        Self {
            timeline_id,
            selected: None,
            form_visible: true,
        }
    }

    /// Dispatches one widget event. Returns the removal decision when the
    /// event was a remove request, `None` otherwise.
    pub fn handle_event<T: TimelineTransport>(
        &mut self,
        transport: &T,
        events: &mut EventSet,
        event: WidgetEvent,
    ) -> Option<RemovalDecision> {
        match event {
            WidgetEvent::Selected(ids) => {
                self.on_selected(&ids, events);
                None
            }
            WidgetEvent::RemoveRequested(id) => {
                Some(self.on_remove_requested(transport, events, id))
            }
        }
    }

    /// Applies a selection change from the widget.
    ///
    /// Exactly one id resolves the full record from the live collection;
    /// zero, multiple, or an unknown id reset to the placeholder.
    pub fn on_selected(&mut self, ids: &[EventId], events: &EventSet) {
        self.selected = match ids {
            [id] => events.get(*id).cloned(),
            _ => None,
        };
    }

    /// Runs the two-phase delete protocol for a widget-proposed removal.
    ///
    /// The backend authorizes the removal with HTTP 200; only then does the
    /// item leave the live collection (and the selection, if it pointed at
    /// the removed item). On any failure the collection is left untouched so
    /// the widget restores the item.
    pub fn on_remove_requested<T: TimelineTransport>(
        &mut self,
        transport: &T,
        events: &mut EventSet,
        id: EventId,
    ) -> RemovalDecision {
        match transport.delete_event(self.timeline_id, id) {
            Ok(()) => {
                events.remove(id);
                if self.selected.as_ref().is_some_and(|event| event.id == id) {
                    self.selected = None;
                }
                debug!(id, "event removal confirmed");
                RemovalDecision::Confirmed
            }
            Err(err) => {
                warn!(id, error = %err, "event removal rejected, widget restores the item");
                RemovalDecision::Rejected
            }
        }
    }

    /// Current form content: the selected record, or a placeholder at `now`.
    #[must_use]
    pub fn selected_event(&self, now: DateTime<Utc>) -> SelectedEvent {
        match &self.selected {
            Some(event) => SelectedEvent::Item(event.clone()),
            None => SelectedEvent::Placeholder(EventDraft::empty_at(now)),
        }
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<EventId> {
        self.selected.as_ref().map(|event| event.id)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Flips add-event form visibility; no other side effects.
    pub fn toggle_event_form(&mut self) -> bool {
        self.form_visible = !self.form_visible;
        self.form_visible
    }

    #[must_use]
    pub fn event_form_visible(&self) -> bool {
        self.form_visible
    }

    #[must_use]
    pub fn timeline_id(&self) -> u64 {
        self.timeline_id
    }
}
