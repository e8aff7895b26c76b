//! Punch sequence validation
//!
//! The four punches of a day must occur in order: clock in, optionally a
//! lunch break (out then in), clock out. Each may be recorded at most once.

use shiftclock_domain::{PunchType, TimeEntry};

/// Validate a requested punch against the entry's recorded state.
///
/// Returns the ordered list of violations, possibly empty. Caller contract:
/// if non-empty, reject the punch with the first message and leave the entry
/// unmodified. The lock check (`is_locked`) is a precondition handled by the
/// caller before sequence validation runs.
pub fn validate_sequence(entry: &TimeEntry, punch_type: PunchType) -> Vec<String> {
    let mut violations = Vec::new();

    match punch_type {
        PunchType::ClockIn => {
            if entry.clock_in.is_some() {
                violations.push("Already clocked in".to_string());
            }
        }
        PunchType::LunchOut => {
            if entry.clock_in.is_none() {
                violations.push("Must clock in before starting break".to_string());
            }
            if entry.lunch_out.is_some() {
                violations.push("Already on break".to_string());
            }
        }
        PunchType::LunchIn => {
            if entry.lunch_out.is_none() {
                violations.push("Must start break first".to_string());
            }
            if entry.lunch_in.is_some() {
                violations.push("Already returned from break".to_string());
            }
        }
        PunchType::ClockOut => {
            if entry.clock_in.is_none() {
                violations.push("Must clock in first".to_string());
            }
            if entry.lunch_out.is_some() && entry.lunch_in.is_none() {
                violations.push("Must end break before clocking out".to_string());
            }
            if entry.clock_out.is_some() {
                violations.push("Already clocked out".to_string());
            }
        }
    }

    violations
}
