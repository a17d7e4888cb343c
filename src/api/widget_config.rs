use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::event::TimelineEvent;
use crate::core::group::TimelineGroup;
use crate::core::window::TimelineWindow;
use crate::error::{TimelineError, TimelineResult};

/// One week in milliseconds — the reference lower zoom limit.
pub const WEEK_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Default rendering style applied to items without an explicit `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStyle {
    Box,
    Point,
    Range,
    #[default]
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    #[default]
    Top,
    Bottom,
}

/// Placement of the time axis and of items relative to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub axis: Edge,
    pub item: Edge,
}

/// Ordering applied to group rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupOrder {
    #[default]
    Id,
    Content,
}

impl GroupOrder {
    #[must_use]
    pub fn compare(self, a: &TimelineGroup, b: &TimelineGroup) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Content => a.content.cmp(&b.content),
        }
    }
}

/// Tie-break comparator for overlapping items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemOrder {
    /// By `start` ascending; events without a canonical start order last.
    #[default]
    StartAscending,
    /// Keep the payload's input order.
    InputOrder,
}

impl ItemOrder {
    #[must_use]
    pub fn compare(self, a: &TimelineEvent, b: &TimelineEvent) -> Ordering {
        match self {
            Self::InputOrder => Ordering::Equal,
            Self::StartAscending => match (a.start, b.start) {
                (Some(a_start), Some(b_start)) => a_start.cmp(&b_start),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

/// Per-unit formats for the minor axis labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinorLabelFormat {
    pub minute: String,
    pub hour: String,
}

impl Default for MinorLabelFormat {
    fn default() -> Self {
        Self {
            minute: "h:mma".to_owned(),
            hour: "ha".to_owned(),
        }
    }
}

/// Construction options recognized by the external rendering widget.
///
/// This type is serializable so host applications can persist/load widget
/// setup without inventing their own ad-hoc format. The loader merges the
/// fitted [`TimelineWindow`] into `window` before widget construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Enables drag/remove/resize editing.
    #[serde(default = "default_true")]
    pub editable: bool,
    /// Overlapping items stack vertically.
    #[serde(default = "default_true")]
    pub stack: bool,
    #[serde(default = "default_true")]
    pub show_major_labels: bool,
    #[serde(default = "default_true")]
    pub show_current_time: bool,
    #[serde(default = "default_true")]
    pub tooltip_on_item_update_time: bool,
    /// Narrowest reachable visible span, in milliseconds.
    #[serde(default = "default_zoom_min_ms")]
    pub zoom_min_ms: i64,
    /// Widest reachable visible span; unbounded when absent.
    #[serde(default)]
    pub zoom_max_ms: Option<i64>,
    #[serde(default)]
    pub item_type: ItemStyle,
    #[serde(default)]
    pub minor_labels: MinorLabelFormat,
    #[serde(default)]
    pub group_order: GroupOrder,
    #[serde(default)]
    pub item_order: ItemOrder,
    #[serde(default)]
    pub orientation: Orientation,
    /// Fitted visible range and pan/zoom limits, merged in by the loader.
    #[serde(default)]
    pub window: Option<TimelineWindow>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            editable: true,
            stack: true,
            show_major_labels: true,
            show_current_time: true,
            tooltip_on_item_update_time: true,
            zoom_min_ms: default_zoom_min_ms(),
            zoom_max_ms: None,
            item_type: ItemStyle::default(),
            minor_labels: MinorLabelFormat::default(),
            group_order: GroupOrder::default(),
            item_order: ItemOrder::default(),
            orientation: Orientation::default(),
            window: None,
        }
    }
}

impl WidgetConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the widget allows editing interactions.
    #[must_use]
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Sets vertical stacking of overlapping items.
    #[must_use]
    pub fn with_stack(mut self, stack: bool) -> Self {
        self.stack = stack;
        self
    }

    /// Sets pan/zoom span limits in milliseconds.
    #[must_use]
    pub fn with_zoom_limits(mut self, zoom_min_ms: i64, zoom_max_ms: Option<i64>) -> Self {
        self.zoom_min_ms = zoom_min_ms;
        self.zoom_max_ms = zoom_max_ms;
        self
    }

    /// Sets the default item rendering style.
    #[must_use]
    pub fn with_item_type(mut self, item_type: ItemStyle) -> Self {
        self.item_type = item_type;
        self
    }

    /// Sets per-unit minor label formats.
    #[must_use]
    pub fn with_minor_labels(mut self, minor_labels: MinorLabelFormat) -> Self {
        self.minor_labels = minor_labels;
        self
    }

    /// Sets the group row ordering.
    #[must_use]
    pub fn with_group_order(mut self, group_order: GroupOrder) -> Self {
        self.group_order = group_order;
        self
    }

    /// Sets the item tie-break comparator.
    #[must_use]
    pub fn with_item_order(mut self, item_order: ItemOrder) -> Self {
        self.item_order = item_order;
        self
    }

    /// Sets axis/item orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Merges the fitted window into the configuration.
    #[must_use]
    pub fn with_window(mut self, window: TimelineWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_true() -> bool {
    true
}

fn default_zoom_min_ms() -> i64 {
    WEEK_MS
}
