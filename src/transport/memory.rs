use std::cell::RefCell;

use crate::core::types::EventId;
use crate::error::{TimelineError, TimelineResult};
use crate::transport::TimelineTransport;

/// In-memory transport used by tests and headless hosts.
///
/// It serves a seeded payload and answers deletes with a scripted status, so
/// coordinator and loader behavior stays deterministic without a network.
#[derive(Debug)]
pub struct MemoryTransport {
    payload: Option<String>,
    delete_status: u16,
    deletes: RefCell<Vec<(u64, EventId)>>,
}

impl Default for MemoryTransport {
    fn default() -> Self {
        Self {
            payload: None,
            delete_status: 200,
            deletes: RefCell::new(Vec::new()),
        }
    }
}

impl MemoryTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the body returned by `fetch_timeline`.
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Scripts the HTTP status every delete resolves with (default 200).
    #[must_use]
    pub fn with_delete_status(mut self, status: u16) -> Self {
        self.delete_status = status;
        self
    }

    /// `(timeline_id, event_id)` pairs of every delete issued so far,
    /// including rejected ones.
    #[must_use]
    pub fn deletes(&self) -> Vec<(u64, EventId)> {
        self.deletes.borrow().clone()
    }
}

impl TimelineTransport for MemoryTransport {
    fn fetch_timeline(&self, _user_id: u64) -> TimelineResult<String> {
        self.payload
            .clone()
            .ok_or_else(|| TimelineError::Transport("no payload seeded".to_owned()))
    }

    fn delete_event(&self, timeline_id: u64, event_id: EventId) -> TimelineResult<()> {
        self.deletes.borrow_mut().push((timeline_id, event_id));
        if self.delete_status == 200 {
            Ok(())
        } else {
            Err(TimelineError::BackendStatus {
                status: self.delete_status,
            })
        }
    }
}
