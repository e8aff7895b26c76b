//! Domain types and models

mod entry;
mod payroll;
mod user;

pub use entry::{EntryStatus, NewTimeEntry, PunchRequest, PunchType, TimeEntry, TimeEntryChanges};
pub use payroll::{NewPayrollPeriod, PayrollPeriod, PayrollSummary, PeriodStatus};
pub use user::{NewUser, User};
