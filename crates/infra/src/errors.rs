//! Conversions from external infrastructure errors into domain errors.

use shiftclock_domain::ShiftClockError;
use tokio_postgres::error::SqlState;
use tokio_postgres::Error as PgError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ShiftClockError);

impl From<InfraError> for ShiftClockError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ShiftClockError> for InfraError {
    fn from(value: ShiftClockError) -> Self {
        InfraError(value)
    }
}

impl From<PgError> for InfraError {
    fn from(value: PgError) -> Self {
        InfraError(pg_error_to_domain(value))
    }
}

/// Map a `tokio_postgres` error onto the domain taxonomy.
///
/// Constraint violations keep a stable message so callers can distinguish
/// duplicate rows; everything else degrades to a generic database error.
pub fn pg_error_to_domain(err: PgError) -> ShiftClockError {
    match err.code() {
        Some(state) if *state == SqlState::UNIQUE_VIOLATION => {
            ShiftClockError::Database("unique constraint violation".into())
        }
        Some(state) if *state == SqlState::FOREIGN_KEY_VIOLATION => {
            ShiftClockError::Database("foreign key constraint violation".into())
        }
        Some(state) => {
            ShiftClockError::Database(format!("postgres failure ({}): {err}", state.code()))
        }
        None => ShiftClockError::Database(err.to_string()),
    }
}
