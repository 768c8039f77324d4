//! # agenda-core
//!
//! Temporal event layout and reconciliation engine for a personal/family
//! scheduling client. Converts timed events into non-overlapping day-grid
//! column layouts, turns pointer-drag deltas into discrete time edits, and
//! merges locally authored events with events imported from an external
//! calendar source.
//!
//! All computation is pure and synchronous: no I/O, no timers, no hidden
//! state. Callers own persistence, rendering, and gesture capture.
//!
//! ## Modules
//!
//! - [`timemath`] — clock strings ↔ minute offsets ↔ day fractions
//! - [`visibility`] — which calendar dates an event occupies
//! - [`layout`] — overlap clustering and column assignment for one day
//! - [`retime`] — interactive move/resize drag sessions
//! - [`reconcile`] — local/external merge, dedup, and source toggling
//! - [`event`] — the `TimedEvent` record the engine operates on
//! - [`error`] — error types

pub mod error;
pub mod event;
pub mod layout;
pub mod reconcile;
pub mod retime;
pub mod timemath;
pub mod visibility;

pub use error::AgendaError;
pub use event::{SourceTag, TimedEvent, MIN_DURATION_MINUTES};
pub use layout::{layout_day, Placement};
pub use reconcile::{
    disable_external_source, reconcile, reconcile_detailed, sort_for_display, Reconciliation,
};
pub use retime::{RetimeConfig, RetimeController, RetimeMode, RetimeOutcome, RetimeProposal};
pub use visibility::{events_for_date, occurs_on};
