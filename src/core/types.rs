use serde::{Deserialize, Serialize};

/// Stable backend identifier of a timeline event.
pub type EventId = i64;

/// Stable backend identifier of an event group.
pub type GroupId = i64;

/// Banner metadata served alongside the event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMeta {
    pub title: String,
    #[serde(default)]
    pub sub_title: String,
}
