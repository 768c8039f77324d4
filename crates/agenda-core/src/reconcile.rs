//! Merge locally authored and externally imported event lists into one
//! canonical display list, and apply source enable/disable transitions.
//!
//! Dedup is identity-based only: an external candidate is dropped when its id
//! collides with a kept event, when a kept local event already references it,
//! or when it advertises a reverse reference to a kept local id. There is
//! deliberately no title+date+time fuzzy matching, because similarly-named
//! user-created events must be allowed to coexist.
//!
//! Everything here is a pure function over the two lists it is given;
//! serializing fetch-then-reconcile sequences is the caller's job.

use std::collections::{HashMap, HashSet};

use crate::event::{SourceTag, TimedEvent};

/// Result of a detailed merge.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// The canonical, duplicate-free display list. Ordering is not
    /// significant; callers re-sort via [`sort_for_display`].
    pub events: Vec<TimedEvent>,
    /// External ids claimed as `external_ref` by more than one kept local
    /// event. The duplicate is dropped anyway (dedup is conservative); this
    /// exists so the caller can log the condition.
    pub ambiguous_refs: Vec<String>,
}

/// Merge the two source lists into one display list.
///
/// Local events are authoritative and always kept, as are pinned events.
/// Surviving external candidates are appended unchanged; reconciliation
/// never rewrites an event's `source_tag`.
pub fn reconcile(local_events: &[TimedEvent], external_events: &[TimedEvent]) -> Vec<TimedEvent> {
    reconcile_detailed(local_events, external_events).events
}

/// Merge, additionally reporting ambiguous identity matches.
pub fn reconcile_detailed(
    local_events: &[TimedEvent],
    external_events: &[TimedEvent],
) -> Reconciliation {
    let kept: Vec<&TimedEvent> = local_events
        .iter()
        .filter(|e| e.source_tag == SourceTag::Local || e.pinned)
        .collect();

    let kept_ids: HashSet<&str> = kept.iter().map(|e| e.id.as_str()).collect();

    // external id -> number of kept local events referencing it
    let mut ref_counts: HashMap<&str, usize> = HashMap::new();
    for event in &kept {
        if let Some(ext) = event.external_ref.as_deref() {
            *ref_counts.entry(ext).or_insert(0) += 1;
        }
    }

    let mut events: Vec<TimedEvent> = kept.iter().map(|e| (*e).clone()).collect();

    for candidate in external_events {
        let id_collision = kept_ids.contains(candidate.id.as_str());
        let already_linked = ref_counts.contains_key(candidate.id.as_str());
        let reverse_linked = candidate
            .reverse_ref
            .as_deref()
            .is_some_and(|local_id| kept_ids.contains(local_id));

        if id_collision || already_linked || reverse_linked {
            continue;
        }
        events.push(candidate.clone());
    }

    let mut ambiguous_refs: Vec<String> = ref_counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(ext, _)| ext.to_string())
        .collect();
    ambiguous_refs.sort();

    Reconciliation {
        events,
        ambiguous_refs,
    }
}

/// Apply the "disable external source" transition to a merged list.
///
/// Unpinned external events are removed; pinned ones (explicitly persisted
/// after sync) survive. Re-enabling is simply a fresh [`reconcile`] with a
/// newly fetched external list, which is idempotent.
pub fn disable_external_source(merged: &[TimedEvent]) -> Vec<TimedEvent> {
    merged
        .iter()
        .filter(|e| e.source_tag != SourceTag::External || e.pinned)
        .cloned()
        .collect()
}

/// Display ordering: by date, all-day events first, then by start time.
pub fn sort_for_display(events: &mut [TimedEvent]) {
    events.sort_by(|a, b| {
        a.anchor_date
            .cmp(&b.anchor_date)
            .then_with(|| start_key(a).cmp(&start_key(b)))
    });
}

// All-day events (no parseable start) sort before timed ones.
fn start_key(event: &TimedEvent) -> i64 {
    if event.is_all_day {
        return -1;
    }
    event
        .start_time
        .as_deref()
        .and_then(|s| crate::timemath::to_minutes(s).ok())
        .unwrap_or(-1)
}
