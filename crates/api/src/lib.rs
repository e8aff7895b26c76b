//! # ShiftClock API
//!
//! HTTP layer for the ShiftClock service: the axum router, route handlers,
//! session extraction, and the application context that wires core services
//! to storage implementations.

pub mod context;
pub mod error;
pub mod extract;
pub mod routes;
pub mod utils;

pub use context::AppContext;
pub use error::{ApiError, ApiResult};
pub use routes::router;
