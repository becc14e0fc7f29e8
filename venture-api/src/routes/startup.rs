//! Startup listing for investing teams

use axum::{extract::State, Json};

use crate::dto::{StartupResponse, StartupsResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// List startups still open for investment, newest first
pub async fn list_pending(State(state): State<AppState>) -> ApiResult<Json<StartupsResponse>> {
    let startups = state.startups.list_pending().await?;

    Ok(Json(StartupsResponse {
        startups: startups.iter().map(StartupResponse::from).collect(),
    }))
}
