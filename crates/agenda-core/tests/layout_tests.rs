//! Tests for overlap clustering and column assignment.

use chrono::NaiveDate;

use agenda_core::event::{SourceTag, TimedEvent, MIN_DURATION_MINUTES};
use agenda_core::layout_day;

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

/// Helper to create a timed event at `start` ("HH:MM") with `duration` minutes.
fn timed(id: &str, start: &str, duration: i64) -> TimedEvent {
    TimedEvent {
        id: id.to_string(),
        title: String::new(),
        anchor_date: anchor(),
        end_date: None,
        start_time: Some(start.to_string()),
        duration_minutes: Some(duration),
        is_all_day: false,
        source_tag: SourceTag::Local,
        external_ref: None,
        reverse_ref: None,
        pinned: false,
    }
}

fn layout(events: &[TimedEvent]) -> std::collections::HashMap<String, agenda_core::Placement> {
    let refs: Vec<&TimedEvent> = events.iter().collect();
    layout_day(&refs, MIN_DURATION_MINUTES).unwrap()
}

#[test]
fn empty_input_empty_map() {
    assert!(layout(&[]).is_empty());
}

#[test]
fn single_event_takes_full_width() {
    let events = vec![timed("a", "09:00", 60)];
    let placements = layout(&events);

    let p = &placements["a"];
    assert_eq!(p.column_index, 0);
    assert_eq!(p.column_count, 1);
}

#[test]
fn two_overlapping_events_get_two_columns() {
    // A 09:00+60 and B 09:30+60 overlap → one cluster, two columns.
    let events = vec![timed("a", "09:00", 60), timed("b", "09:30", 60)];
    let placements = layout(&events);

    assert_eq!(placements["a"].column_index, 0);
    assert_eq!(placements["b"].column_index, 1);
    assert_eq!(placements["a"].column_count, 2);
    assert_eq!(placements["b"].column_count, 2);
}

#[test]
fn non_overlapping_event_starts_its_own_cluster() {
    // C at 11:00 touches neither A nor B → separate cluster, full width.
    let events = vec![
        timed("a", "09:00", 60),
        timed("b", "09:30", 60),
        timed("c", "11:00", 30),
    ];
    let placements = layout(&events);

    assert_eq!(placements["c"].column_index, 0);
    assert_eq!(
        placements["c"].column_count, 1,
        "clusters must not borrow column counts from each other"
    );
    assert_eq!(placements["a"].column_count, 2);
}

#[test]
fn adjacent_events_share_a_column() {
    // B starts exactly when A ends → no overlap, same column reused.
    let events = vec![timed("a", "09:00", 60), timed("b", "10:00", 60)];
    let placements = layout(&events);

    assert_eq!(placements["a"].column_index, 0);
    assert_eq!(placements["b"].column_index, 0);
}

#[test]
fn longer_event_at_shared_start_gets_leftmost_column() {
    let events = vec![timed("short", "09:00", 30), timed("long", "09:00", 120)];
    let placements = layout(&events);

    assert_eq!(
        placements["long"].column_index, 0,
        "longer event at a shared start has priority for column 0"
    );
    assert_eq!(placements["short"].column_index, 1);
}

#[test]
fn identical_events_keep_input_order() {
    let events = vec![timed("first", "09:00", 60), timed("second", "09:00", 60)];
    let placements = layout(&events);

    assert_eq!(placements["first"].column_index, 0);
    assert_eq!(placements["second"].column_index, 1);
}

#[test]
fn freed_column_is_reused() {
    // A 09:00-10:00, B 09:30-10:30, C 10:00-11:00: C fits back into A's column.
    let events = vec![
        timed("a", "09:00", 60),
        timed("b", "09:30", 60),
        timed("c", "10:00", 60),
    ];
    let placements = layout(&events);

    assert_eq!(placements["c"].column_index, 0, "column 0 is free again at 10:00");
    for id in ["a", "b", "c"] {
        assert_eq!(
            placements[id].column_count, 2,
            "cluster width is uniform even after a column frees up"
        );
    }
}

#[test]
fn short_duration_floored_before_overlap_analysis() {
    // B claims 10 minutes but the 30-minute floor makes it overlap A.
    let events = vec![timed("a", "09:15", 30), timed("b", "09:00", 10)];
    let placements = layout(&events);

    assert_eq!(placements["a"].column_count, 2, "floored B overlaps A");
    assert_ne!(
        placements["a"].column_index,
        placements["b"].column_index
    );
}

#[test]
fn all_day_events_are_skipped() {
    let mut all_day = timed("allday", "09:00", 60);
    all_day.is_all_day = true;
    let events = vec![all_day, timed("a", "09:00", 60)];

    let placements = layout(&events);
    assert!(!placements.contains_key("allday"));
    assert_eq!(placements["a"].column_count, 1);
}

#[test]
fn missing_duration_resolves_to_floor() {
    let mut e = timed("a", "09:00", 60);
    e.duration_minutes = None;
    let overlapping = timed("b", "09:15", 30);

    let placements = layout(&[e, overlapping]);
    assert_eq!(placements["a"].column_count, 2, "floored duration still overlaps B");
}

#[test]
fn timed_event_without_start_time_fails_fast() {
    // Only is_all_day routes an event off the timed grid; a missing start
    // time on a timed event is malformed input, same as an empty string.
    let mut e = timed("a", "09:00", 60);
    e.start_time = None;
    let refs = vec![&e];

    let err = layout_day(&refs, MIN_DURATION_MINUTES).unwrap_err();
    assert!(matches!(err, agenda_core::AgendaError::InvalidTimeFormat(_)));
}

#[test]
fn malformed_start_time_fails_fast() {
    let mut e = timed("a", "09:00", 60);
    e.start_time = Some("24:00".to_string());
    let refs = vec![&e];

    let err = layout_day(&refs, MIN_DURATION_MINUTES).unwrap_err();
    assert!(
        matches!(err, agenda_core::AgendaError::InvalidTimeFormat(_)),
        "unexpected error: {err}"
    );
}

#[test]
fn routine_floor_allows_tighter_packing() {
    use agenda_core::event::ROUTINE_MIN_DURATION_MINUTES;

    // Two 15-minute routines back to back only collide under the 30-minute
    // floor; the routine floor keeps them in one column.
    let events = vec![timed("brush", "07:00", 15), timed("pack", "07:15", 15)];

    let refs: Vec<&TimedEvent> = events.iter().collect();
    let tight = layout_day(&refs, ROUTINE_MIN_DURATION_MINUTES).unwrap();
    assert_eq!(tight["brush"].column_count, 1);
    assert_eq!(tight["pack"].column_index, 0);

    let floored = layout(&events);
    assert_eq!(
        floored["brush"].column_count, 2,
        "default floor stretches both to 30 minutes, forcing two columns"
    );
}

#[test]
fn three_way_overlap_uses_three_columns() {
    let events = vec![
        timed("a", "09:00", 120),
        timed("b", "09:30", 120),
        timed("c", "10:00", 120),
    ];
    let placements = layout(&events);

    let mut indices: Vec<usize> = ["a", "b", "c"]
        .iter()
        .map(|id| placements[*id].column_index)
        .collect();
    indices.sort();
    assert_eq!(indices, vec![0, 1, 2]);
    assert!(placements.values().all(|p| p.column_count == 3));
}
