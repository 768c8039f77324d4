//! Determine which calendar dates an event occupies.
//!
//! Span events (`anchor_date..=end_date`) are visible on every date in the
//! inclusive range; everything else is visible only on its anchor date.
//! Recurrence expansion happens upstream; by the time events reach this
//! module they are materialized records with a concrete date range.

use chrono::NaiveDate;

use crate::event::TimedEvent;

/// Whether `event` is visible on `date`.
///
/// Calendar-date comparison only; time of day plays no part.
pub fn occurs_on(event: &TimedEvent, date: NaiveDate) -> bool {
    match event.end_date {
        Some(end) if end != event.anchor_date => event.anchor_date <= date && date <= end,
        _ => date == event.anchor_date,
    }
}

/// Filter `events` down to those visible on `date`.
///
/// No ordering guarantee; ordering is the layout engine's job.
pub fn events_for_date<'a>(events: &'a [TimedEvent], date: NaiveDate) -> Vec<&'a TimedEvent> {
    events.iter().filter(|e| occurs_on(e, date)).collect()
}
