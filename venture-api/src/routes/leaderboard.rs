//! Leaderboard endpoint

use axum::{extract::State, Json};

use crate::dto::{LeaderboardResponse, TeamStandingResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// All teams ordered by balance descending
pub async fn leaderboard(State(state): State<AppState>) -> ApiResult<Json<LeaderboardResponse>> {
    let standings = state.teams.leaderboard().await?;

    Ok(Json(LeaderboardResponse {
        teams: standings.iter().map(TeamStandingResponse::from).collect(),
    }))
}
