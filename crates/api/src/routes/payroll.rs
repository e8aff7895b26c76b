//! Payroll routes: current and previous period summaries.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::Json;
use shiftclock_domain::{PayrollSummary, ShiftClockError};

use crate::error::{error_label, ApiResult};
use crate::extract::CurrentUser;
use crate::utils::logging::log_route_outcome;
use crate::AppContext;

/// Summary of the active payroll period. 404 when no period is active.
pub async fn current(
    State(ctx): State<Arc<AppContext>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<PayrollSummary>> {
    let route = "payroll::current";
    let start = Instant::now();

    let result = ctx.payroll_service.current_summary(user.id).await;
    log_route_outcome(
        route,
        start.elapsed(),
        result.is_ok(),
        result.as_ref().err().map(error_label),
    );

    let summary = result?
        .ok_or_else(|| ShiftClockError::NotFound("No active payroll period".into()))?;
    Ok(Json(summary))
}

/// Summary of the period under review. `null` when there is none.
pub async fn previous(
    State(ctx): State<Arc<AppContext>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Option<PayrollSummary>>> {
    let summary = ctx.payroll_service.previous_summary(user.id).await?;
    Ok(Json(summary))
}
