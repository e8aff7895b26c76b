//! Authentication routes: register, login, logout, current user.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use shiftclock_domain::constants::SESSION_COOKIE_NAME;
use shiftclock_domain::{NewUser, ShiftClockError, User};
use shiftclock_infra::{hash_password, verify_password};
use tracing::info;

use crate::error::ApiResult;
use crate::extract::{session_token, CurrentUser};
use crate::AppContext;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Create a new user account.
pub async fn register(
    State(ctx): State<Arc<AppContext>>,
    Json(payload): Json<NewUser>,
) -> ApiResult<Response> {
    validate_registration(&payload)?;

    if ctx.users.get_user_by_username(&payload.username).await?.is_some() {
        return Err(ShiftClockError::InvalidInput("Username already exists".into()).into());
    }

    let password_hash = hash_password(&payload.password)?;
    let user = ctx.users.create_user(&payload, &password_hash).await?;
    info!(username = %user.username, "user registered");

    Ok((StatusCode::CREATED, Json(json!({ "user": user }))).into_response())
}

/// Authenticate and establish a session.
pub async fn login(
    State(ctx): State<Arc<AppContext>>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Response> {
    let user = ctx
        .users
        .get_user_by_username(&payload.username)
        .await?
        .filter(|user| verify_password(&payload.password, &user.password_hash))
        .ok_or_else(|| ShiftClockError::Auth("Invalid username or password".into()))?;

    let token = ctx.sessions.create(user.id);
    let cookie = format!("{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax");
    info!(username = %user.username, "login successful");

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(json!({ "user": user, "message": "Login successful" })),
    )
        .into_response())
}

/// Revoke the current session, if any.
pub async fn logout(State(ctx): State<Arc<AppContext>>, headers: HeaderMap) -> Response {
    if let Some(token) = session_token(&headers) {
        ctx.sessions.revoke(&token);
    }

    // Expire the cookie client-side regardless of whether a session existed.
    let cookie = format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; Max-Age=0");
    ([(header::SET_COOKIE, cookie)], Json(json!({ "message": "Logout successful" })))
        .into_response()
}

/// The session's user.
pub async fn current_user(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}

fn validate_registration(payload: &NewUser) -> Result<(), ShiftClockError> {
    let NewUser { username, password, name, employee_id } = payload;
    if username.trim().is_empty()
        || password.is_empty()
        || name.trim().is_empty()
        || employee_id.trim().is_empty()
    {
        return Err(ShiftClockError::InvalidInput("Invalid user data".into()));
    }
    Ok(())
}
