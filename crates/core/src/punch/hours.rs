//! Worked-hours arithmetic
//!
//! Net worked time is `(clock_out - clock_in) - break`, reported as a
//! decimal string with one fractional digit. Negative results clamp to zero;
//! client-supplied punches are not monotonicity-checked upstream, so an
//! inverted pair must not surface as negative hours.

use chrono::{DateTime, Duration, Utc};
use shiftclock_domain::constants::ZERO_HOURS;
use shiftclock_domain::TimeEntry;

/// Net worked hours for a finished day.
///
/// Returns "0.0" unless both clock punches are present. The break is
/// subtracted only when both break punches are present.
pub fn calculate_hours(
    clock_in: Option<DateTime<Utc>>,
    clock_out: Option<DateTime<Utc>>,
    lunch_out: Option<DateTime<Utc>>,
    lunch_in: Option<DateTime<Utc>>,
) -> String {
    let (Some(clock_in), Some(clock_out)) = (clock_in, clock_out) else {
        return ZERO_HOURS.to_string();
    };

    let mut worked = clock_out - clock_in;
    if let (Some(break_start), Some(break_end)) = (lunch_out, lunch_in) {
        worked = worked - (break_end - break_start);
    }

    format_hours(worked)
}

/// Live "worked so far" hours for an in-progress day.
///
/// `clock_out` defaults to `now`; while on break (lunch out recorded, lunch
/// in not) the elapsed break time up to `now` is subtracted instead.
pub fn worked_hours_so_far(entry: &TimeEntry, now: DateTime<Utc>) -> String {
    let Some(clock_in) = entry.clock_in else {
        return ZERO_HOURS.to_string();
    };

    let clock_out = entry.clock_out.unwrap_or(now);
    let mut worked = clock_out - clock_in;

    match (entry.lunch_out, entry.lunch_in) {
        (Some(break_start), Some(break_end)) => worked = worked - (break_end - break_start),
        (Some(break_start), None) => worked = worked - (now - break_start),
        _ => {}
    }

    format_hours(worked)
}

fn format_hours(worked: Duration) -> String {
    let hours = worked.num_milliseconds() as f64 / 3_600_000.0;
    format!("{:.1}", hours.max(0.0))
}
