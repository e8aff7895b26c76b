//! Authentication route coverage: register, login, logout, current user.

mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;
use support::spawn_app;

#[tokio::test]
async fn register_creates_user_and_hides_password() {
    let app = spawn_app().await;

    let (status, body, _) = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "username": "jsmith",
                "password": "hunter2hunter2",
                "name": "Jane Smith",
                "employeeId": "EMP002"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["username"], "jsmith");
    assert_eq!(body["user"]["employeeId"], "EMP002");
    assert!(body["user"].get("passwordHash").is_none(), "hash must not leak");
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let app = spawn_app().await;

    let payload = json!({
        "username": "admin",
        "password": "whatever123",
        "name": "Impostor",
        "employeeId": "EMP999"
    });
    let (status, body, _) =
        app.request(Method::POST, "/api/auth/register", None, Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid input: Username already exists");
}

#[tokio::test]
async fn empty_fields_are_rejected_at_the_boundary() {
    let app = spawn_app().await;

    let (status, _, _) = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "username": "",
                "password": "",
                "name": "Nobody",
                "employeeId": "EMP003"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let app = spawn_app().await;

    let (status, body, set_cookie) = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "username": "admin", "password": "wrong" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Authentication error: Invalid username or password");
    assert!(set_cookie.is_none());
}

#[tokio::test]
async fn session_cookie_resolves_current_user() {
    let app = spawn_app().await;
    let cookie = app.login_admin().await;

    let (status, body, _) =
        app.request(Method::GET, "/api/user/current", Some(&cookie), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "admin");
    assert_eq!(body["employeeId"], "EMP001");
}

#[tokio::test]
async fn requests_without_session_are_unauthorized() {
    let app = spawn_app().await;

    for uri in [
        "/api/user/current",
        "/api/time-entries/today",
        "/api/time-entries/recent",
        "/api/payroll/current",
    ] {
        let (status, body, _) = app.request(Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri} should require a session");
        assert_eq!(body["message"], "Authentication error: Authentication required");
    }
}

#[tokio::test]
async fn logout_revokes_the_session() {
    let app = spawn_app().await;
    let cookie = app.login_admin().await;

    let (status, body, set_cookie) =
        app.request(Method::POST, "/api/auth/logout", Some(&cookie), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logout successful");
    assert!(set_cookie.unwrap_or_default().contains("Max-Age=0"));

    let (status, _, _) = app.request(Method::GET, "/api/user/current", Some(&cookie), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
