//! Team snapshot endpoint

use axum::{extract::State, Extension, Json};

use crate::auth::Claims;
use crate::dto::{InvestmentResponse, TeamResponse, TeamSnapshotResponse};
use crate::error::ApiResult;
use crate::routes::auth_context;
use crate::state::AppState;

/// The caller's team with its investment history
pub async fn snapshot(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<TeamSnapshotResponse>> {
    let ctx = auth_context(&claims)?;

    let (team, investments) = state.teams.snapshot(&ctx).await?;

    Ok(Json(TeamSnapshotResponse {
        team: TeamResponse::from(&team),
        investments: investments.iter().map(InvestmentResponse::from).collect(),
    }))
}
