//! Route registration.

mod auth;
mod health;
mod payroll;
mod time_entries;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::AppContext;

/// Build the full application router.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        // Authentication
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/user/current", get(auth::current_user))
        // Time entries
        .route("/api/time-entries/today", get(time_entries::today))
        .route("/api/time-entries/punch", post(time_entries::punch))
        .route("/api/time-entries/recent", get(time_entries::recent))
        // Payroll
        .route("/api/payroll/current", get(payroll::current))
        .route("/api/payroll/previous", get(payroll::previous))
        // Liveness
        .route("/api/health", get(health::health))
        .with_state(ctx)
}
