//! # medreg-api — Axum API Service
//!
//! The HTTP surface of the medreg stack, built on Axum/Tower/Tokio.
//!
//! ## Routes
//!
//! - `GET /v1/deadlines` — the one data operation: the merged compliance
//!   calendar with cache metadata. No parameters; all narrowing happens
//!   client-side on the returned list.
//! - `GET /health/live`, `GET /health/ready` — unauthenticated probes.
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers — they delegate to
//!   `medreg-service` and map errors.
//! - All errors map to structured HTTP responses via [`AppError`].

pub mod error;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;

pub use error::AppError;
pub use state::AppState;

/// Assemble the application router over the shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/v1/deadlines", get(routes::deadlines::get_deadlines))
        .route("/health/live", get(routes::health::live))
        .route("/health/ready", get(routes::health::ready))
        .with_state(state)
}
