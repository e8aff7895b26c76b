//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for ShiftClock
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ShiftClockError {
    /// Punch out of order or duplicate. Carries the first violation message
    /// verbatim; the entry is left unmodified.
    #[error("{0}")]
    SequenceViolation(String),

    /// The owning payroll period is in its review window.
    #[error("Time entry is locked during reserve period")]
    LockedPeriod,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for ShiftClock operations
pub type Result<T> = std::result::Result<T, ShiftClockError>;
