//! The event record the engine operates on.
//!
//! `TimedEvent` mirrors the shape the persistence collaborator hands us:
//! camelCase JSON field names, optional time fields for all-day events, and
//! provenance/linkage fields used by reconciliation. The engine never creates
//! or deletes records; it only computes derived visibility/layout and
//! proposes retime edits for the caller to persist.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Default minimum effective duration for layout and retiming.
pub const MIN_DURATION_MINUTES: i64 = 30;

/// Shorter floor used by routine-style events.
pub const ROUTINE_MIN_DURATION_MINUTES: i64 = 15;

/// Fallback start (09:00) when an event carries a malformed start time and a
/// retime session must begin anyway.
pub const FALLBACK_START_MINUTES: i64 = 540;

/// Fallback duration paired with [`FALLBACK_START_MINUTES`].
pub const FALLBACK_DURATION_MINUTES: i64 = 60;

/// Which source authored an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTag {
    /// Authored in this app; authoritative, never dropped by reconciliation.
    Local,
    /// Imported from the external calendar source.
    External,
}

/// A single timed (or all-day) calendar event.
///
/// A *span event* carries an `end_date` later than `anchor_date` and is
/// visible on every date in the inclusive range. Time fields are `None` for
/// all-day events; `start_time` is a wall-clock `"HH:MM"` string otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedEvent {
    /// Stable identifier, unique within a source.
    pub id: String,
    /// Display string, opaque to the algorithms.
    #[serde(default)]
    pub title: String,
    /// Calendar date the event starts on.
    pub anchor_date: NaiveDate,
    /// Inclusive end date; `Some(d)` with `d > anchor_date` makes this a span event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Wall-clock start of day, `"HH:MM"`. `None` for all-day events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Length in minutes. Floored to the configured minimum during layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    /// All-day events skip the timed grid and render in a fixed-height lane.
    #[serde(default)]
    pub is_all_day: bool,
    /// Provenance. Reconciliation decides inclusion but never rewrites this.
    pub source_tag: SourceTag,
    /// For a local event: id of its counterpart record in the external source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ref: Option<String>,
    /// For an external event: advertised pointer back to a local id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_ref: Option<String>,
    /// Externally-sourced events explicitly persisted locally survive the
    /// external source being disabled.
    #[serde(default)]
    pub pinned: bool,
}
