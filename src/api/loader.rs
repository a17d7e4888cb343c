use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::api::payload::TimelinePayload;
use crate::api::widget_config::WidgetConfig;
use crate::core::dataset::{EventSet, GroupSet};
use crate::core::event::normalize_events;
use crate::core::group::{TimelineGroup, link_nested_groups};
use crate::core::types::TimelineMeta;
use crate::core::window::{TimelineWindow, WindowTuning};
use crate::error::TimelineResult;
use crate::transport::TimelineTransport;

/// Fully prepared timeline state, ready for widget construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTimeline {
    pub meta: TimelineMeta,
    pub events: EventSet,
    pub groups: GroupSet,
    pub window: TimelineWindow,
    /// Host-supplied configuration with the fitted window merged in.
    pub config: WidgetConfig,
}

/// Drives the load pipeline: fetch, decode, normalize, link, fit, configure.
///
/// Runs once at startup; the produced collections seed the widget and are
/// mutated in place afterwards, never refetched.
#[derive(Debug)]
pub struct TimelineLoader<T: TimelineTransport> {
    transport: T,
    tuning: WindowTuning,
    loading: bool,
}

impl<T: TimelineTransport> TimelineLoader<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            tuning: WindowTuning::default(),
            loading: false,
        }
    }

    /// Overrides the window padding applied around the fitted data range.
    #[must_use]
    pub fn with_window_tuning(mut self, tuning: WindowTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// True from the start of a load until it resolves, success or failure.
    /// The display layer keys its loading placeholder off this flag.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Loads and prepares the timeline for `user_id` at the current wall clock.
    pub fn load(&mut self, user_id: u64, config: WidgetConfig) -> TimelineResult<LoadedTimeline> {
        self.load_at(user_id, config, Utc::now())
    }

    /// Same as [`Self::load`], with an explicit normalization instant.
    pub fn load_at(
        &mut self,
        user_id: u64,
        config: WidgetConfig,
        now: DateTime<Utc>,
    ) -> TimelineResult<LoadedTimeline> {
        self.loading = true;
        let result = self.run_pipeline(user_id, config, now);
        // Cleared on failure too: a dead backend must surface an error view,
        // not leave the host stuck on its loading placeholder.
        self.loading = false;

        if let Err(err) = &result {
            warn!(user_id, error = %err, "timeline load failed");
        }
        result
    }

    fn run_pipeline(
        &self,
        user_id: u64,
        config: WidgetConfig,
        now: DateTime<Utc>,
    ) -> TimelineResult<LoadedTimeline> {
        let body = self.transport.fetch_timeline(user_id)?;
        let payload = TimelinePayload::from_json_str(&body)?;
        debug!(
            user_id,
            events = payload.event_list.len(),
            groups = payload.event_group_list.len(),
            "decoded timeline payload"
        );

        let events = normalize_events(&payload.event_list, now);

        let mut groups: Vec<TimelineGroup> = payload
            .event_group_list
            .into_iter()
            .map(TimelineGroup::from)
            .collect();
        link_nested_groups(&mut groups);

        let window = TimelineWindow::from_events_tuned(&events, now, self.tuning);
        let config = config.with_window(window);

        Ok(LoadedTimeline {
            meta: payload.timeline,
            events: EventSet::from_events(events),
            groups: GroupSet::from_groups(groups),
            window,
            config,
        })
    }
}
