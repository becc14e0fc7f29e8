//! Registration and login endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::auth::issue_token;
use crate::dto::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Register a new user and team
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    state
        .accounts
        .register(&req.name, &req.email, &req.password, &req.team_name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully".to_string(),
        }),
    ))
}

/// Verify credentials and mint a session token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = state.accounts.authenticate(&req.email, &req.password).await?;

    let token = issue_token(&user, &state.auth.config)
        .map_err(|_| ApiError::InternalError("failed to mint session token".to_string()))?;

    Ok(Json(LoginResponse {
        token,
        user: UserResponse::from(&user),
    }))
}
