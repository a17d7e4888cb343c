pub mod dataset;
pub mod event;
pub mod group;
pub mod types;
pub mod window;

pub use dataset::{EventSet, GroupSet};
pub use event::{RawEvent, TimelineEvent, normalize_event, normalize_events, parse_flexible_date};
pub use group::{RawGroup, TimelineGroup, link_nested_groups};
pub use types::{EventId, GroupId, TimelineMeta};
pub use window::{TimelineWindow, WindowTuning};
