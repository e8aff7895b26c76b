//! Request extractors: session cookie resolution.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use shiftclock_domain::constants::SESSION_COOKIE_NAME;
use shiftclock_domain::{ShiftClockError, User};

use crate::error::ApiError;
use crate::AppContext;

/// The authenticated user resolved from the session cookie.
///
/// Rejects with 401 "Authentication required" when the cookie is absent, the
/// token is not a live session, or the session's user no longer exists.
pub struct CurrentUser(pub User);

impl FromRequestParts<Arc<AppContext>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &Arc<AppContext>,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers).ok_or_else(auth_required)?;
        let user_id = ctx.sessions.resolve(&token).ok_or_else(auth_required)?;
        let user = ctx.users.get_user(user_id).await?.ok_or_else(auth_required)?;
        Ok(Self(user))
    }
}

/// Pull the session token out of the `Cookie` header, if present.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE_NAME).then(|| value.to_string())
    })
}

fn auth_required() -> ApiError {
    ApiError(ShiftClockError::Auth("Authentication required".into()))
}
