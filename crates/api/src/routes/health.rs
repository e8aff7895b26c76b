//! Liveness endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::AppContext;

/// Service liveness plus the storage backend the startup probe selected.
pub async fn health(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "storage": ctx.storage_backend.as_str(),
    }))
}
