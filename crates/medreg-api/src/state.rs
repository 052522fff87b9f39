//! # Application State
//!
//! Shared state for the Axum application: the deadline service behind an
//! `Arc`, cloned into every handler.

use std::sync::Arc;

use medreg_service::DeadlineService;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// The deadline read path.
    pub service: Arc<DeadlineService>,
}

impl AppState {
    /// Wrap a service as application state.
    pub fn new(service: Arc<DeadlineService>) -> Self {
        Self { service }
    }
}
