//! Payroll period summaries over a user's time entries.

pub mod ports;
mod service;

pub use service::PayrollService;
