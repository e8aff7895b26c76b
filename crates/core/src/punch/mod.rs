//! The punch engine
//!
//! Pure functions over a day's entry state: sequence validation, hours
//! arithmetic, and missing-punch detection. No I/O and no hidden state;
//! callers supply every instant, so behavior is deterministic under test.

mod hours;
mod missing;
mod validator;

pub use hours::{calculate_hours, worked_hours_so_far};
pub use missing::{derive_status, detect_missing_punches};
pub use validator::validate_sequence;
