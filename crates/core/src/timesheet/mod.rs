//! Timesheet orchestration: one punch, validated and applied atomically
//! within a handler invocation.

pub mod ports;
mod service;

pub use service::TimesheetService;
