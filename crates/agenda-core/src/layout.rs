//! Overlap clustering and column assignment for one day's timed events.
//!
//! Events are grouped into maximal overlap-connected clusters, then greedily
//! assigned to columns within each cluster (first-fit on column end times).
//! Rendering `left = column_index / column_count * 100%` and
//! `width = 100% / column_count` yields collision-free side-by-side placement.
//!
//! The greedy assignment is deliberately not graph-coloring-optimal: for
//! pathological overlap patterns it may use more columns than strictly
//! necessary, but it is exact for the common few-simultaneous-events case
//! and runs in `O(n·k)` with `k` columns per cluster.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::TimedEvent;
use crate::timemath::to_minutes;

/// Column slot for one event on one date.
///
/// Derived, ephemeral state: recomputed fresh per render pass, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Zero-based lane within the cluster.
    pub column_index: usize,
    /// Total lanes in the cluster; uniform for every member.
    pub column_count: usize,
}

/// Resolved interval for one event, in minutes since midnight.
struct Interval<'a> {
    id: &'a str,
    start: i64,
    end: i64,
}

/// Compute column placements for the timed events visible on one date.
///
/// All-day events in the input are skipped; they render in a separate
/// fixed-height lane, not the timed grid. Durations below `min_duration`
/// are floored to it before overlap analysis.
///
/// # Errors
/// Returns `AgendaError::InvalidTimeFormat` if a timed event carries an
/// absent or unparseable `start_time`.
pub fn layout_day(
    events: &[&TimedEvent],
    min_duration: i64,
) -> Result<HashMap<String, Placement>> {
    let mut intervals = Vec::with_capacity(events.len());
    for event in events {
        if event.is_all_day {
            continue;
        }
        // A timed event without a start time is as malformed as an empty
        // clock string; both fail the same way.
        let clock = event.start_time.as_deref().unwrap_or("");
        let start = to_minutes(clock)?;
        let duration = effective_duration(event, min_duration);
        intervals.push(Interval {
            id: event.id.as_str(),
            start,
            end: start + duration,
        });
    }

    // Longer events at a shared start come first, taking the leftmost
    // column. The sort is stable, so remaining ties keep input order.
    intervals.sort_by_key(|iv| (iv.start, iv.start - iv.end));

    let mut placements = HashMap::with_capacity(intervals.len());
    for cluster in split_into_clusters(&intervals) {
        assign_columns(cluster, &mut placements);
    }

    Ok(placements)
}

/// Effective duration after flooring, never below `min_duration`.
///
/// A stored non-positive duration is a contract violation upstream: it fails
/// loud in development and is defensively floored in release builds.
fn effective_duration(event: &TimedEvent, min_duration: i64) -> i64 {
    let raw = event.duration_minutes.unwrap_or(min_duration);
    debug_assert!(
        raw > 0,
        "degenerate interval for event {}: {} minutes",
        event.id,
        raw
    );
    raw.max(min_duration)
}

/// Split sorted intervals into maximal overlap-connected clusters.
///
/// A new cluster starts whenever the next event begins at or after the
/// furthest end seen so far, so events in different clusters never share
/// column space.
fn split_into_clusters<'a, 'b>(sorted: &'b [Interval<'a>]) -> Vec<&'b [Interval<'a>]> {
    let mut clusters = Vec::new();
    let mut cluster_start = 0;
    let mut cluster_max_end = i64::MIN;

    for (i, iv) in sorted.iter().enumerate() {
        // First interval always opens the cluster; later ones close it when
        // they start at or after everything seen so far has ended.
        if i > 0 && iv.start >= cluster_max_end {
            clusters.push(&sorted[cluster_start..i]);
            cluster_start = i;
        }
        cluster_max_end = cluster_max_end.max(iv.end);
    }
    if cluster_start < sorted.len() {
        clusters.push(&sorted[cluster_start..]);
    }

    clusters
}

/// Greedy first-fit column assignment within one cluster.
///
/// `column_ends[i]` holds the end time of the last event placed in column
/// `i`; an event reuses the first column that has already ended by its
/// start, otherwise it opens a new column. Every member reports the final
/// column count so the cluster renders with uniform widths.
fn assign_columns(cluster: &[Interval<'_>], placements: &mut HashMap<String, Placement>) {
    let mut column_ends: Vec<i64> = Vec::new();
    let mut assigned: Vec<(&str, usize)> = Vec::with_capacity(cluster.len());

    for iv in cluster {
        let column = match column_ends.iter().position(|&end| end <= iv.start) {
            Some(i) => {
                column_ends[i] = iv.end;
                i
            }
            None => {
                column_ends.push(iv.end);
                column_ends.len() - 1
            }
        };
        assigned.push((iv.id, column));
    }

    let column_count = column_ends.len();
    for (id, column_index) in assigned {
        placements.insert(
            id.to_string(),
            Placement {
                column_index,
                column_count,
            },
        );
    }
}
