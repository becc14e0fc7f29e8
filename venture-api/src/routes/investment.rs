//! Investment placement endpoint

use axum::{extract::State, Extension, Json};

use venture_core::StartupId;

use crate::auth::Claims;
use crate::dto::{PlaceInvestmentRequest, PlaceInvestmentResponse};
use crate::error::ApiResult;
use crate::routes::auth_context;
use crate::state::AppState;

/// Place an investment for the caller's team
pub async fn place(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<PlaceInvestmentRequest>,
) -> ApiResult<Json<PlaceInvestmentResponse>> {
    let ctx = auth_context(&claims)?;
    let startup_id = StartupId::new(req.startup_id);

    let placed = state
        .investments
        .place(&ctx, &startup_id, req.amount)
        .await?;

    Ok(Json(PlaceInvestmentResponse::from(&placed)))
}
