//! Structured request logging helpers.

use std::time::Duration;

use tracing::{info, warn};

/// Log the outcome of a route handler with structured fields.
///
/// # Parameters
/// * `route` - Logical route identifier (e.g. `"time_entries::punch"`).
/// * `elapsed` - Duration the handler took.
/// * `success` - Whether the handler completed successfully.
/// * `error_type` - Stable error label when it did not.
///
/// The helper keeps handlers concise and the log shape consistent across
/// routes. Callers must avoid forwarding sensitive values in `route`.
#[inline]
pub fn log_route_outcome(
    route: &str,
    elapsed: Duration,
    success: bool,
    error_type: Option<&str>,
) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(route, duration_ms, "request_success");
    } else {
        warn!(route, duration_ms, error_type, "request_failure");
    }
}
