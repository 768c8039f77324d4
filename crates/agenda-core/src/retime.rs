//! Interactive retime sessions: move and resize one event by dragging.
//!
//! A controller is created when a drag begins and discarded on release. It
//! turns continuous pointer deltas into discrete `(start, duration)`
//! proposals, enforcing the minimum-duration and day-boundary constraints.
//! It never persists anything; the caller applies the proposal it emits.
//!
//! Interactive editing must never hard-fail mid-drag, so a malformed anchor
//! time degrades to a documented default (09:00, 60 minutes) instead of
//! erroring.

use crate::event::{
    TimedEvent, FALLBACK_DURATION_MINUTES, FALLBACK_START_MINUTES, MINUTES_PER_DAY,
    MIN_DURATION_MINUTES,
};
use crate::timemath::to_minutes;

/// Which edge of the event the drag grabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetimeMode {
    /// Translate the whole event; duration unchanged.
    Move,
    /// Drag the top edge; end time stays fixed.
    ResizeTop,
    /// Drag the bottom edge; start time stays fixed.
    ResizeBottom,
}

/// Session configuration.
#[derive(Debug, Clone, Copy)]
pub struct RetimeConfig {
    /// Floor for the resulting duration.
    pub min_duration: i64,
    /// Snap start/duration to this grid (e.g. 15-minute steps) when set.
    pub snap_minutes: Option<i64>,
    /// Pixel distance below which pointer motion is still a click.
    pub movement_threshold_px: f64,
}

impl Default for RetimeConfig {
    fn default() -> Self {
        Self {
            min_duration: MIN_DURATION_MINUTES,
            snap_minutes: None,
            movement_threshold_px: 5.0,
        }
    }
}

/// A proposed `(start, duration)` edit, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetimeProposal {
    pub start_minutes: i64,
    pub duration_minutes: i64,
}

/// What the completed session amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetimeOutcome {
    /// The pointer never crossed the movement threshold: treat the release
    /// as a tap (e.g. open the detail view), not an edit.
    Click,
    /// The drag produced an edit for the caller to persist.
    Edited {
        start_minutes: i64,
        duration_minutes: i64,
    },
}

/// One drag gesture, one controller instance, sequential pointer samples.
///
/// Single-owner and single-threaded; aborting a drag goes through the same
/// [`release`](Self::release) path as normal completion so no state is left
/// half-committed.
#[derive(Debug)]
pub struct RetimeController {
    mode: RetimeMode,
    config: RetimeConfig,
    anchor_start: i64,
    anchor_duration: i64,
    reference_position_px: f64,
    viewport_extent_px: f64,
    has_moved: bool,
    current: RetimeProposal,
}

impl RetimeController {
    /// Begin a retime session on `event`.
    ///
    /// `reference_position_px` is the pointer position at gesture start and
    /// `viewport_extent_px` the pixel height of one full day; together they
    /// scale pixel deltas to minute deltas. Never fails: a malformed or
    /// absent anchor time falls back to 09:00 / 60 minutes.
    pub fn begin(
        mode: RetimeMode,
        event: &TimedEvent,
        reference_position_px: f64,
        viewport_extent_px: f64,
        config: RetimeConfig,
    ) -> Self {
        let anchor_start = event
            .start_time
            .as_deref()
            .and_then(|s| to_minutes(s).ok())
            .unwrap_or(FALLBACK_START_MINUTES);
        // Cap at one day: an oversized duration would otherwise invert the
        // move clamp bounds and panic mid-drag.
        let anchor_duration = event
            .duration_minutes
            .filter(|&d| d > 0)
            .unwrap_or(FALLBACK_DURATION_MINUTES)
            .max(config.min_duration)
            .min(MINUTES_PER_DAY);

        Self {
            mode,
            config,
            anchor_start,
            anchor_duration,
            reference_position_px,
            viewport_extent_px,
            has_moved: false,
            current: RetimeProposal {
                start_minutes: anchor_start,
                duration_minutes: anchor_duration,
            },
        }
    }

    /// Whether the pointer has crossed the movement threshold at any point.
    ///
    /// Callers branch on this at release time: below the threshold the
    /// gesture was a click, not a drag.
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Feed one pointer-movement sample.
    ///
    /// Returns the new proposal, or `None` while the gesture is still within
    /// the click threshold. Once the threshold is crossed the session stays a
    /// drag; small follow-up deltas keep emitting proposals.
    pub fn update(&mut self, position_px: f64) -> Option<RetimeProposal> {
        let pixel_delta = position_px - self.reference_position_px;
        if !self.has_moved {
            if pixel_delta.abs() < self.config.movement_threshold_px {
                return None;
            }
            self.has_moved = true;
        }

        let minute_delta =
            (pixel_delta / self.viewport_extent_px * MINUTES_PER_DAY as f64).round() as i64;
        self.current = self.apply_delta(minute_delta);
        Some(self.current)
    }

    /// End the session, normally or on abort.
    pub fn release(self) -> RetimeOutcome {
        if self.has_moved {
            RetimeOutcome::Edited {
                start_minutes: self.current.start_minutes,
                duration_minutes: self.current.duration_minutes,
            }
        } else {
            RetimeOutcome::Click
        }
    }

    fn apply_delta(&self, minute_delta: i64) -> RetimeProposal {
        let min = self.config.min_duration;
        let proposal = match self.mode {
            RetimeMode::Move => RetimeProposal {
                start_minutes: (self.anchor_start + minute_delta)
                    .clamp(0, MINUTES_PER_DAY - self.anchor_duration),
                duration_minutes: self.anchor_duration,
            },
            RetimeMode::ResizeBottom => RetimeProposal {
                start_minutes: self.anchor_start,
                duration_minutes: (self.anchor_duration + minute_delta).max(min),
            },
            RetimeMode::ResizeTop => {
                // End time stays fixed; shrinking below the floor pushes the
                // start back instead.
                let fixed_end = self.anchor_start + self.anchor_duration;
                let candidate_start = (self.anchor_start + minute_delta).max(0);
                let duration = fixed_end - candidate_start;
                if duration < min {
                    RetimeProposal {
                        start_minutes: fixed_end - min,
                        duration_minutes: min,
                    }
                } else {
                    RetimeProposal {
                        start_minutes: candidate_start,
                        duration_minutes: duration,
                    }
                }
            }
        };

        match self.config.snap_minutes {
            Some(step) if step > 0 => self.snap(proposal, step),
            _ => proposal,
        }
    }

    /// Quantize a proposal to the snap grid, then re-apply the clamps so
    /// snapping can never undo a constraint.
    fn snap(&self, proposal: RetimeProposal, step: i64) -> RetimeProposal {
        let min = self.config.min_duration;
        let snapped_start = round_to_step(proposal.start_minutes, step);
        let snapped_duration = round_to_step(proposal.duration_minutes, step).max(min);

        match self.mode {
            RetimeMode::Move => RetimeProposal {
                start_minutes: snapped_start.clamp(0, MINUTES_PER_DAY - proposal.duration_minutes),
                duration_minutes: proposal.duration_minutes,
            },
            RetimeMode::ResizeBottom => RetimeProposal {
                start_minutes: proposal.start_minutes,
                duration_minutes: snapped_duration,
            },
            RetimeMode::ResizeTop => {
                let fixed_end = self.anchor_start + self.anchor_duration;
                let start = snapped_start.max(0);
                let duration = (fixed_end - start).max(min);
                RetimeProposal {
                    start_minutes: fixed_end - duration,
                    duration_minutes: duration,
                }
            }
        }
    }
}

fn round_to_step(value: i64, step: i64) -> i64 {
    let half = step / 2;
    ((value + half).div_euclid(step)) * step
}
