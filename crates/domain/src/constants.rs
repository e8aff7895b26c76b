//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Punch engine
pub const MISSING_PUNCH_CUTOFF_HOUR: u32 = 18; // 6pm local, end-of-day cutoff
pub const ZERO_HOURS: &str = "0.0";

// Timesheet views
pub const RECENT_ENTRIES_LIMIT: usize = 10;

// Payroll periods
pub const PAYROLL_PERIOD_DAYS: i64 = 14;
pub const RESERVE_WEEK_DAYS: i64 = 7;

// Sessions
pub const SESSION_COOKIE_NAME: &str = "shiftclock_session";
pub const SESSION_TOKEN_BYTES: usize = 16;
