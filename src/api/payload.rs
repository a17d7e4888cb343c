use serde::{Deserialize, Serialize};

use crate::core::event::RawEvent;
use crate::core::group::RawGroup;
use crate::core::types::TimelineMeta;
use crate::error::{TimelineError, TimelineResult};

/// Wire-format payload served by `GET /timeline/{userId}`.
///
/// Decoding here is the validation boundary: a body that does not carry the
/// expected shape surfaces as [`TimelineError::MalformedPayload`] instead of
/// letting undefined values flow into the pipeline. Fetched once per page
/// load and never refetched after mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePayload {
    pub timeline: TimelineMeta,
    pub event_list: Vec<RawEvent>,
    pub event_group_list: Vec<RawGroup>,
}

impl TimelinePayload {
    /// Decodes a raw JSON body into the typed payload model.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TimelineError::MalformedPayload(format!("failed to parse payload: {e}")))
    }

    /// Serializes the payload to pretty JSON for fixtures and debugging.
    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize payload: {e}")))
    }
}
