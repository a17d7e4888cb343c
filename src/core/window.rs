use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::event::TimelineEvent;

/// Tuning for the derived visible window and pan/zoom limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowTuning {
    /// Padding applied on each side of the fitted data range, in months.
    pub padding_months: u32,
}

impl Default for WindowTuning {
    fn default() -> Self {
        Self { padding_months: 12 }
    }
}

/// Derived temporal bounds for the widget configuration.
///
/// `start`/`end` are the initial visible range, `min`/`max` the absolute
/// pan/zoom limits. All four are computed once from the normalized event set
/// and never recomputed after load; `min` equals `start` and `max` equals
/// `end`, so panning beyond the padded data range is effectively disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub min: DateTime<Utc>,
    pub max: DateTime<Utc>,
}

impl TimelineWindow {
    /// Fits the window from normalized events with default one-year padding.
    #[must_use]
    pub fn from_events(events: &[TimelineEvent], now: DateTime<Utc>) -> Self {
        Self::from_events_tuned(events, now, WindowTuning::default())
    }

    /// Fits the window from normalized events using explicit tuning.
    ///
    /// `first_date` is the minimum parseable event start; `last_date` is the
    /// maximum event end, or `now` when no end exceeds it, so the window
    /// always reaches at least the present. An event set with no parseable
    /// starts falls back to a window centered on `now` instead of handing
    /// the widget an undefined bound.
    #[must_use]
    pub fn from_events_tuned(
        events: &[TimelineEvent],
        now: DateTime<Utc>,
        tuning: WindowTuning,
    ) -> Self {
        let padding = Months::new(tuning.padding_months);

        let first_date = events.iter().filter_map(|event| event.start).min();
        let Some(first_date) = first_date else {
            debug!("no datable events, centering window on current time");
            return Self::from_bounds(now, now, padding);
        };

        let last_end = events.iter().filter_map(|event| event.end).max();
        let last_date = last_end.map_or(now, |end| end.max(now));

        Self::from_bounds(first_date, last_date, padding)
    }

    fn from_bounds(first_date: DateTime<Utc>, last_date: DateTime<Utc>, padding: Months) -> Self {
        let start = first_date.checked_sub_months(padding).unwrap_or(first_date);
        let end = last_date.checked_add_months(padding).unwrap_or(last_date);
        Self {
            start,
            end,
            min: start,
            max: end,
        }
    }

    /// Visible span as a signed duration.
    #[must_use]
    pub fn span(&self) -> chrono::Duration {
        self.end - self.start
    }
}
