//! # Health Probes
//!
//! Unauthenticated liveness/readiness endpoints. Readiness does not probe
//! the Federal Register: the service degrades to cached data on upstream
//! failure, so upstream health is not a reason to pull the pod.

use axum::http::StatusCode;

/// Liveness: the process is up.
pub async fn live() -> StatusCode {
    StatusCode::OK
}

/// Readiness: the service can accept traffic.
pub async fn ready() -> StatusCode {
    StatusCode::OK
}
