use indexmap::IndexMap;
use tracing::warn;

use crate::core::event::TimelineEvent;
use crate::core::group::TimelineGroup;
use crate::core::types::{EventId, GroupId};

/// Ordered, id-addressable store of normalized events.
///
/// Models the widget's live item collection: the loader seeds it once at
/// construction time, confirmed removals mutate it in place, and it is never
/// refetched. Iteration preserves input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventSet {
    inner: IndexMap<EventId, TimelineEvent>,
}

impl EventSet {
    /// Builds the set from normalized events, keeping input order.
    ///
    /// Ids are assumed unique; a duplicate replaces the earlier record at
    /// its original position and is logged.
    #[must_use]
    pub fn from_events(events: Vec<TimelineEvent>) -> Self {
        let mut inner = IndexMap::with_capacity(events.len());
        for event in events {
            let id = event.id;
            if inner.insert(id, event).is_some() {
                warn!(id, "duplicate event id in payload, keeping the last record");
            }
        }
        Self { inner }
    }

    #[must_use]
    pub fn get(&self, id: EventId) -> Option<&TimelineEvent> {
        self.inner.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: EventId) -> bool {
        self.inner.contains_key(&id)
    }

    /// Adds an event, replacing any record with the same id.
    pub fn insert(&mut self, event: TimelineEvent) {
        self.inner.insert(event.id, event);
    }

    /// Removes an event, preserving the order of the remaining records.
    pub fn remove(&mut self, id: EventId) -> Option<TimelineEvent> {
        self.inner.shift_remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimelineEvent> {
        self.inner.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = EventId> + '_ {
        self.inner.keys().copied()
    }
}

/// Ordered, id-addressable store of groups, seeded once after nesting runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupSet {
    inner: IndexMap<GroupId, TimelineGroup>,
}

impl GroupSet {
    #[must_use]
    pub fn from_groups(groups: Vec<TimelineGroup>) -> Self {
        let mut inner = IndexMap::with_capacity(groups.len());
        for group in groups {
            let id = group.id;
            if inner.insert(id, group).is_some() {
                warn!(id, "duplicate group id in payload, keeping the last record");
            }
        }
        Self { inner }
    }

    #[must_use]
    pub fn get(&self, id: GroupId) -> Option<&TimelineGroup> {
        self.inner.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimelineGroup> {
        self.inner.values()
    }
}
