pub mod loader;
pub mod payload;
pub mod selection;
pub mod widget_config;

pub use loader::{LoadedTimeline, TimelineLoader};
pub use payload::TimelinePayload;
pub use selection::{
    EventDraft, RemovalDecision, SelectedEvent, SelectionCoordinator, WidgetEvent,
};
pub use widget_config::{
    Edge, GroupOrder, ItemOrder, ItemStyle, MinorLabelFormat, Orientation, WidgetConfig,
};
