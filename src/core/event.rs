use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::types::{EventId, GroupId};

/// Wire-format event record as served by the backend.
///
/// `content`, `group`, `type` and `style` are display attributes the pipeline
/// carries through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub id: EventId,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    /// Marks an ongoing event; normalization replaces its end with "now".
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub group: Option<GroupId>,
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

/// Normalized event with canonical comparable timestamps.
///
/// `start`/`end` are `None` when the raw value failed to parse; such events
/// still render best-effort and never abort a load. `title` is derived for
/// display and is never authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: EventId,
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupId>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// Normalizes one raw event at the given wall-clock instant.
///
/// Steps run exactly once, in this order:
/// 1. `current` override — the effective end becomes `now`.
/// 2. `title` derivation from the pre-parse string forms.
/// 3. Parsing of `start`/`end` into canonical `DateTime<Utc>` values.
#[must_use]
pub fn normalize_event(raw: &RawEvent, now: DateTime<Utc>) -> TimelineEvent {
    let end_label = if raw.current {
        Some(format_instant(now))
    } else {
        raw.end.clone()
    };

    let title = match &end_label {
        Some(end) => format!("{} - {}", raw.start, end),
        None => raw.start.clone(),
    };

    let start = parse_flexible_date(&raw.start);
    if start.is_none() {
        warn!(
            id = raw.id,
            start = %raw.start,
            "unparseable event start, keeping event without a canonical date"
        );
    }

    let end = if raw.current {
        Some(now)
    } else {
        raw.end.as_deref().and_then(|raw_end| {
            let parsed = parse_flexible_date(raw_end);
            if parsed.is_none() {
                warn!(id = raw.id, end = %raw_end, "unparseable event end, dropping end bound");
            }
            parsed
        })
    };

    TimelineEvent {
        id: raw.id,
        start,
        end,
        title,
        content: raw.content.clone(),
        group: raw.group,
        item_type: raw.item_type.clone(),
        style: raw.style.clone(),
    }
}

/// Normalizes a whole event collection, preserving input order.
#[must_use]
pub fn normalize_events(raw: &[RawEvent], now: DateTime<Utc>) -> Vec<TimelineEvent> {
    raw.iter().map(|event| normalize_event(event, now)).collect()
}

/// Parses the date shapes the backend is known to emit.
///
/// Accepted, in order: RFC 3339, `YYYY-MM-DD HH:MM:SS` (UTC),
/// `YYYY-MM-DD +HH:MM` / `YYYY-MM-DD +HHMM` (local midnight at that offset),
/// and bare `YYYY-MM-DD` (midnight UTC). Returns `None` for anything else.
#[must_use]
pub fn parse_flexible_date(input: &str) -> Option<DateTime<Utc>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.and_utc());
    }

    // `YYYY-MM-DD Z` — a bare date with an optional trailing UTC offset.
    // An unrecognized trailer is ignored rather than failing the whole value.
    let (date_part, offset) = match trimmed.split_once(' ') {
        Some((date, trailer)) => (date, parse_utc_offset(trailer)),
        None => (trimmed, None),
    };

    let midnight = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)?;

    match offset {
        Some(offset) => offset
            .from_local_datetime(&midnight)
            .single()
            .map(|parsed| parsed.with_timezone(&Utc)),
        None => Some(midnight.and_utc()),
    }
}

fn parse_utc_offset(raw: &str) -> Option<FixedOffset> {
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match raw.strip_prefix('+') {
        Some(rest) => (1, rest),
        None => (-1, raw.strip_prefix('-')?),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn format_instant(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M:%S").to_string()
}
