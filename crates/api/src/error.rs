//! Domain error to HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use shiftclock_domain::ShiftClockError;
use tracing::error;

/// Wrapper that maps [`ShiftClockError`] onto an HTTP response.
///
/// Rejections surface the domain message verbatim as `{"message": ...}`,
/// matching what the punch engine promises its callers.
#[derive(Debug)]
pub struct ApiError(pub ShiftClockError);

/// Result type alias for route handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<ShiftClockError> for ApiError {
    fn from(value: ShiftClockError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ShiftClockError::SequenceViolation(_)
            | ShiftClockError::LockedPeriod
            | ShiftClockError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ShiftClockError::Auth(_) => StatusCode::UNAUTHORIZED,
            ShiftClockError::NotFound(_) => StatusCode::NOT_FOUND,
            ShiftClockError::Database(_)
            | ShiftClockError::Config(_)
            | ShiftClockError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }

        (status, Json(json!({ "message": self.0.to_string() }))).into_response()
    }
}

/// Convert a `ShiftClockError` into a stable label suitable for logging.
pub fn error_label(error: &ShiftClockError) -> &'static str {
    match error {
        ShiftClockError::SequenceViolation(_) => "sequence_violation",
        ShiftClockError::LockedPeriod => "locked_period",
        ShiftClockError::InvalidInput(_) => "invalid_input",
        ShiftClockError::Auth(_) => "auth",
        ShiftClockError::NotFound(_) => "not_found",
        ShiftClockError::Database(_) => "database",
        ShiftClockError::Config(_) => "config",
        ShiftClockError::Internal(_) => "internal",
    }
}
