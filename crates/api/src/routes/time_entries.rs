//! Time entry routes: today's entry, punches, recent activity.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::Json;
use shiftclock_domain::{PunchRequest, TimeEntry};
use tracing::info;

use crate::error::{error_label, ApiResult};
use crate::extract::CurrentUser;
use crate::utils::logging::log_route_outcome;
use crate::AppContext;

/// Today's entry for the session user, lazily created on first view.
pub async fn today(
    State(ctx): State<Arc<AppContext>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<TimeEntry>> {
    let route = "time_entries::today";
    let start = Instant::now();

    let result = ctx.timesheet_service.today_entry(user.id).await;
    log_route_outcome(
        route,
        start.elapsed(),
        result.is_ok(),
        result.as_ref().err().map(error_label),
    );

    Ok(Json(result?))
}

/// Record a punch against today's entry.
///
/// The request body is the validated boundary contract: a closed punch-type
/// enum and an RFC 3339 instant. Sequence violations and locked entries map
/// to 400 with the first violation message.
pub async fn punch(
    State(ctx): State<Arc<AppContext>>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<PunchRequest>,
) -> ApiResult<Json<TimeEntry>> {
    let route = "time_entries::punch";
    let start = Instant::now();

    info!(route, punch = %request.punch_type, "recording punch");

    let result = ctx.timesheet_service.record_punch(user.id, request).await;
    log_route_outcome(
        route,
        start.elapsed(),
        result.is_ok(),
        result.as_ref().err().map(error_label),
    );

    Ok(Json(result?))
}

/// The latest entries for the session user, newest first.
pub async fn recent(
    State(ctx): State<Arc<AppContext>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<TimeEntry>>> {
    let entries = ctx.timesheet_service.recent_entries(user.id).await?;
    Ok(Json(entries))
}
