mod memory;

pub use memory::MemoryTransport;

use crate::core::types::EventId;
use crate::error::TimelineResult;

/// Contract implemented by any backend transport.
///
/// The loader and coordinator stay independent from the concrete HTTP stack;
/// tests and headless hosts drive them through [`MemoryTransport`].
pub trait TimelineTransport {
    /// `GET /timeline/{userId}` — returns the raw JSON payload body.
    fn fetch_timeline(&self, user_id: u64) -> TimelineResult<String>;

    /// `DELETE /event/{timelineId}/{itemId}` — `Ok` only when the backend
    /// authorized the removal (HTTP 200). Any other outcome is an error and
    /// the caller must leave its live collection untouched.
    fn delete_event(&self, timeline_id: u64, event_id: EventId) -> TimelineResult<()>;
}

#[cfg(feature = "http-transport")]
mod http;
#[cfg(feature = "http-transport")]
pub use http::HttpTransport;
