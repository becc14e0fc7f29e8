//! Health endpoint

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::state::AppState;

/// Liveness check
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}
