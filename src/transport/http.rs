use std::time::Duration;

use tracing::debug;

use crate::core::types::EventId;
use crate::error::{TimelineError, TimelineResult};
use crate::transport::TimelineTransport;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// Blocking HTTP transport against the timeline REST backend.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpTransport {
    /// Builds a transport rooted at `base_url` (trailing slash tolerated).
    pub fn new(base_url: impl Into<String>) -> TimelineResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TimelineError::Transport(format!("http client error: {e}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { client, base_url })
    }
}

impl TimelineTransport for HttpTransport {
    fn fetch_timeline(&self, user_id: u64) -> TimelineResult<String> {
        let url = format!("{}/timeline/{user_id}", self.base_url);
        debug!(%url, "fetching timeline payload");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| TimelineError::Transport(format!("timeline request error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TimelineError::BackendStatus {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .map_err(|e| TimelineError::Transport(format!("timeline body error: {e}")))
    }

    fn delete_event(&self, timeline_id: u64, event_id: EventId) -> TimelineResult<()> {
        let url = format!("{}/event/{timeline_id}/{event_id}", self.base_url);
        debug!(%url, "issuing event delete");

        let response = self
            .client
            .delete(url)
            .send()
            .map_err(|e| TimelineError::Transport(format!("delete request error: {e}")))?;

        // The backend authorizes a removal with 200 exactly; anything else
        // means the widget must restore the item.
        let status = response.status().as_u16();
        if status == 200 {
            Ok(())
        } else {
            Err(TimelineError::BackendStatus { status })
        }
    }
}
