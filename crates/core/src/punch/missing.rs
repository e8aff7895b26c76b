//! Missing-punch detection and status derivation
//!
//! A still-in-progress day is left alone until the end-of-day cutoff; past
//! days are always evaluated. Evaluation takes the caller's local "now" so
//! the functions stay pure.

use chrono::{NaiveDateTime, Timelike};
use shiftclock_domain::constants::MISSING_PUNCH_CUTOFF_HOUR;
use shiftclock_domain::{EntryStatus, TimeEntry};

/// Flag incomplete punch pairs on an entry.
///
/// Only evaluates when the entry's date is not today, or it is today but the
/// local hour has reached the end-of-day cutoff. Returns the ordered list of
/// flag strings, possibly empty.
pub fn detect_missing_punches(entry: &TimeEntry, now_local: NaiveDateTime) -> Vec<String> {
    let mut flags = Vec::new();

    let is_today = entry.date == now_local.date();
    if is_today && now_local.hour() < MISSING_PUNCH_CUTOFF_HOUR {
        return flags;
    }

    if entry.clock_in.is_some() && entry.clock_out.is_none() {
        flags.push("Missing clock out time".to_string());
    }
    if entry.lunch_out.is_some() && entry.lunch_in.is_none() {
        flags.push("Missing break end time".to_string());
    }

    flags
}

/// Derive the entry status from detector output and recorded punches.
pub fn derive_status(entry: &TimeEntry, flags: &[String]) -> EntryStatus {
    if !flags.is_empty() {
        EntryStatus::Flagged
    } else if entry.clock_in.is_some() && entry.clock_out.is_some() {
        EntryStatus::Complete
    } else {
        EntryStatus::Incomplete
    }
}
