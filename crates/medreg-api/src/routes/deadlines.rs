//! # Deadlines Route
//!
//! `GET /v1/deadlines` — the merged compliance calendar. Returns every
//! deadline in one response with cache metadata; there is no pagination
//! and no parameters beyond the implicit "now".

use axum::extract::State;
use axum::Json;

use medreg_service::DeadlineReport;

use crate::error::AppError;
use crate::state::AppState;

/// Serve the current merged deadline list.
pub async fn get_deadlines(State(state): State<AppState>) -> Result<Json<DeadlineReport>, AppError> {
    let report = state.service.current().await?;
    Ok(Json(report))
}
