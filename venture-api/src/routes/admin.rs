//! Admin endpoints: startup lifecycle and team oversight

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use venture_core::{Outcome, StartupId};

use crate::auth::Claims;
use crate::dto::{
    CreateStartupRequest, ResolveOutcomeRequest, ResolveOutcomeResponse, StartupDetailResponse,
    StartupDetailsResponse, StartupEnvelope, StartupResponse, TeamDetailResponse, TeamsResponse,
    UpdateMultiplierRequest,
};
use crate::error::{ApiError, ApiResult};
use crate::routes::auth_context;
use crate::state::AppState;

/// Create a new pending startup
pub async fn create_startup(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateStartupRequest>,
) -> ApiResult<Json<StartupEnvelope>> {
    let ctx = auth_context(&claims)?;

    let startup = state
        .startups
        .create(&ctx, &req.name, &req.description, &req.pitch, req.multiplier)
        .await?;

    Ok(Json(StartupEnvelope {
        startup: StartupResponse::from(&startup),
    }))
}

/// List every startup with its investments
pub async fn list_startups(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<StartupDetailsResponse>> {
    let ctx = auth_context(&claims)?;

    let details = state.startups.list_details(&ctx).await?;

    Ok(Json(StartupDetailsResponse {
        startups: details.iter().map(StartupDetailResponse::from).collect(),
    }))
}

/// Resolve a startup's outcome and apply payouts
pub async fn resolve_outcome(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(req): Json<ResolveOutcomeRequest>,
) -> ApiResult<Json<ResolveOutcomeResponse>> {
    let ctx = auth_context(&claims)?;
    let startup_id = StartupId::new(id);
    let outcome = parse_outcome(&req.outcome)?;

    let record = state
        .resolutions
        .resolve(&ctx, &startup_id, outcome)
        .await?;

    Ok(Json(ResolveOutcomeResponse::from(&record)))
}

/// Adjust a pending startup's multiplier
pub async fn update_multiplier(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(req): Json<UpdateMultiplierRequest>,
) -> ApiResult<Json<StartupEnvelope>> {
    let ctx = auth_context(&claims)?;
    let startup_id = StartupId::new(id);

    let startup = state
        .startups
        .update_multiplier(&ctx, &startup_id, req.multiplier)
        .await?;

    Ok(Json(StartupEnvelope {
        startup: StartupResponse::from(&startup),
    }))
}

/// List every team with its members and investments
pub async fn list_teams(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<TeamsResponse>> {
    let ctx = auth_context(&claims)?;

    let details = state.teams.list_details(&ctx).await?;

    Ok(Json(TeamsResponse {
        teams: details.iter().map(TeamDetailResponse::from).collect(),
    }))
}

fn parse_outcome(s: &str) -> Result<Outcome, ApiError> {
    Outcome::parse_resolution(s).map_err(ApiError::from)
}
