//! Health check handler.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

#[derive(serde::Serialize)]
pub(super) struct HealthCheckResponse {
    pub status: &'static str,
    pub storage: String,
}

/// Liveness probe plus the active storage backend.
pub(super) async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthCheckResponse {
            status: "healthy",
            storage: state.storage.backend_type().to_string(),
        }),
    )
}
