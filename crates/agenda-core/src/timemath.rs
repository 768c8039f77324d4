//! Pure conversions between clock-time strings, minute offsets, and
//! fractional day positions.
//!
//! Parsing is strict: only `HH:MM` with hours 00–23 and minutes 00–59 is
//! accepted, and `"24:00"` is rejected. Formatting is tolerant: minute
//! offsets outside one day wrap via modulo rather than erroring. Callers must
//! treat "no time" (all-day) as a distinct case and never pass it here.

use crate::error::{AgendaError, Result};
use crate::event::MINUTES_PER_DAY;

/// Parse a `"HH:MM"` clock string into minutes since midnight.
///
/// # Errors
/// Returns `AgendaError::InvalidTimeFormat` if the string is empty, not of
/// the form `HH:MM`, or names a time outside `00:00`–`23:59`.
pub fn to_minutes(clock: &str) -> Result<i64> {
    let invalid = || AgendaError::InvalidTimeFormat(clock.to_string());

    let (hours_str, minutes_str) = clock.split_once(':').ok_or_else(invalid)?;

    let hours: i64 = hours_str.parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes_str.parse().map_err(|_| invalid())?;

    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as a zero-padded `"HH:MM"` string.
///
/// Offsets past midnight (or negative) wrap modulo one day, matching the
/// domain's tolerant legacy behavior.
pub fn to_clock_string(minutes: i64) -> String {
    let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

/// Fractional position of a minute offset within one day, in `[0, 1)` for
/// in-day inputs. Used by renderers to place events vertically.
pub fn to_day_fraction(minutes: i64) -> f64 {
    minutes as f64 / MINUTES_PER_DAY as f64
}
