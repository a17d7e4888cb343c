use chrono::{DateTime, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use timeline_rs::core::{
    RawEvent, RawGroup, TimelineGroup, TimelineWindow, link_nested_groups, normalize_events,
};

fn bench_normalize_10k(c: &mut Criterion) {
    let raws = synthetic_raw_events(10_000);
    let now = fixed_now();

    c.bench_function("normalize_events_10k", |b| {
        b.iter(|| {
            let events = normalize_events(black_box(&raws), now);
            black_box(events.len())
        })
    });
}

fn bench_link_nested_groups_1k(c: &mut Criterion) {
    let template: Vec<TimelineGroup> = (0..1_000)
        .map(|i| {
            TimelineGroup::from(RawGroup {
                id: i,
                content: format!("group {i}"),
                parent_group_id: if i % 8 == 0 { None } else { Some(i / 8 * 8) },
            })
        })
        .collect();

    c.bench_function("link_nested_groups_1k", |b| {
        b.iter(|| {
            let mut groups = template.clone();
            link_nested_groups(black_box(&mut groups));
            black_box(groups.len())
        })
    });
}

fn bench_window_fit_10k(c: &mut Criterion) {
    let now = fixed_now();
    let events = normalize_events(&synthetic_raw_events(10_000), now);

    c.bench_function("window_fit_10k", |b| {
        b.iter(|| black_box(TimelineWindow::from_events(black_box(&events), now)))
    });
}

fn synthetic_raw_events(count: usize) -> Vec<RawEvent> {
    (0..count)
        .map(|i| RawEvent {
            id: i as i64,
            start: format!("{:04}-01-01", 1900 + (i % 120)),
            end: if i % 3 == 0 {
                Some(format!("{:04}-06-01", 1900 + (i % 120)))
            } else {
                None
            },
            current: i % 17 == 0,
            content: Some(format!("event {i}")),
            group: Some((i % 32) as i64),
            item_type: None,
            style: None,
        })
        .collect()
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
        .single()
        .expect("valid timestamp")
}

criterion_group!(
    benches,
    bench_normalize_10k,
    bench_link_nested_groups_1k,
    bench_window_fit_10k
);
criterion_main!(benches);
