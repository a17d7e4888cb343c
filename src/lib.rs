//! timeline-rs: data engine for interactive timeline widgets.
//!
//! This crate owns the data-preparation and synchronization pipeline behind a
//! personal-history timeline page: payload decoding, date normalization,
//! nested-group resolution, window fitting, and selection/edit coordination.
//! Rendering belongs to the host's timeline widget; the crate only models
//! that boundary (collections, configuration, and typed widget events).

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;
pub mod transport;

pub use api::{LoadedTimeline, SelectionCoordinator, TimelineLoader, WidgetConfig};
pub use error::{TimelineError, TimelineResult};
