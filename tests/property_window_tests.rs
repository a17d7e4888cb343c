use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use timeline_rs::core::{TimelineEvent, TimelineWindow};

proptest! {
    #[test]
    fn window_brackets_every_event_and_now(
        cases in proptest::collection::vec(
            (-20_000i64..20_000, proptest::option::of(0i64..5_000)),
            0..40,
        )
    ) {
        let now = base();
        let events: Vec<TimelineEvent> = cases
            .iter()
            .enumerate()
            .map(|(index, &(start_days, end_days))| {
                let start = now + Duration::days(start_days);
                event(
                    index as i64 + 1,
                    Some(start),
                    end_days.map(|days| start + Duration::days(days)),
                )
            })
            .collect();

        let window = TimelineWindow::from_events(&events, now);

        prop_assert!(window.start <= window.end);
        prop_assert!(window.end >= now);
        for event in &events {
            if let Some(start) = event.start {
                prop_assert!(window.start <= start);
            }
            if let Some(end) = event.end {
                prop_assert!(window.end >= end);
            }
        }
        prop_assert_eq!(window.min, window.start);
        prop_assert_eq!(window.max, window.end);
    }

    #[test]
    fn undatable_events_never_break_fitting(count in 0usize..10) {
        let now = base();
        let events: Vec<TimelineEvent> =
            (0..count).map(|index| event(index as i64 + 1, None, None)).collect();

        let window = TimelineWindow::from_events(&events, now);

        prop_assert!(window.start < now);
        prop_assert!(window.end > now);
        prop_assert_eq!(window.min, window.start);
        prop_assert_eq!(window.max, window.end);
    }
}

fn event(
    id: i64,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> TimelineEvent {
    TimelineEvent {
        id,
        start,
        end,
        title: String::new(),
        content: None,
        group: None,
        item_type: None,
        style: None,
    }
}

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
        .single()
        .expect("valid timestamp")
}
