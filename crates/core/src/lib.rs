//! # ShiftClock Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The punch engine (sequence validation, hours arithmetic,
//!   missing-punch detection) as pure functions
//! - Port/adapter interfaces (traits) at the storage seam
//! - The timesheet and payroll services
//!
//! ## Architecture Principles
//! - Only depends on `shiftclock-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod payroll;
pub mod punch;
pub mod timesheet;

// Re-export specific items to avoid ambiguity
pub use payroll::ports::PayrollPeriodRepository;
pub use payroll::PayrollService;
pub use punch::{calculate_hours, derive_status, detect_missing_punches, validate_sequence};
pub use timesheet::ports::{TimeEntryRepository, UserRepository};
pub use timesheet::TimesheetService;
