//! Test harness for driving the router over in-memory storage.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use shiftclock_api::{router, AppContext};
use shiftclock_core::{PayrollPeriodRepository, TimeEntryRepository, UserRepository};
use shiftclock_domain::Config;
use shiftclock_infra::database::Storage;
use shiftclock_infra::seed;
use tower::ServiceExt;

/// A router over seeded in-memory storage, with direct repository handles
/// for test fixtures.
pub struct TestApp {
    pub router: Router,
    pub users: Arc<dyn UserRepository>,
    pub entries: Arc<dyn TimeEntryRepository>,
    pub periods: Arc<dyn PayrollPeriodRepository>,
}

/// Build the app the way `AppContext::new` would in degraded mode, with
/// seed data applied.
pub async fn spawn_app() -> TestApp {
    let storage = Storage::memory();
    seed::ensure_seed_data(&storage).await.expect("seed data should apply");

    let users = Arc::clone(&storage.users);
    let entries = Arc::clone(&storage.entries);
    let periods = Arc::clone(&storage.periods);

    let ctx = Arc::new(AppContext::from_storage(Config::default(), storage));
    TestApp { router: router(ctx), users, entries, periods }
}

impl TestApp {
    /// Drive one request through the router and decode the JSON body.
    ///
    /// Returns the status, the decoded body (`Null` when empty), and any
    /// `Set-Cookie` header value.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value, Option<String>) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("request should build"),
            None => builder.body(Body::empty()).expect("request should build"),
        };

        let response =
            self.router.clone().oneshot(request).await.expect("router should respond");

        let status = response.status();
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json, set_cookie)
    }

    /// Log in as the seeded admin and return the session cookie pair.
    pub async fn login_admin(&self) -> String {
        let (status, _, set_cookie) = self
            .request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(serde_json::json!({ "username": "admin", "password": "admin123" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "admin login should succeed");

        let set_cookie = set_cookie.expect("login should set a session cookie");
        set_cookie
            .split(';')
            .next()
            .expect("cookie pair should be present")
            .to_string()
    }
}
