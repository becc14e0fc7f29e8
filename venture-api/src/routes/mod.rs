//! API route handlers

pub mod account;
pub mod admin;
pub mod health;
pub mod investment;
pub mod leaderboard;
pub mod startup;
pub mod team;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use venture_core::AuthContext;

use crate::auth::{require_auth, Claims};
use crate::error::ApiError;
use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/register", post(account::register))
        .route("/login", post(account::login));

    let protected = Router::new()
        // Player endpoints
        .route("/startups", get(startup::list_pending))
        .route("/investments", post(investment::place))
        .route("/team", get(team::snapshot))
        .route("/leaderboard", get(leaderboard::leaderboard))
        // Admin endpoints
        .route(
            "/admin/startups",
            post(admin::create_startup).get(admin::list_startups),
        )
        .route("/admin/startups/:id/outcome", put(admin::resolve_outcome))
        .route(
            "/admin/startups/:id/multiplier",
            put(admin::update_multiplier),
        )
        .route("/admin/teams", get(admin::list_teams))
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            require_auth,
        ));

    Router::new()
        .nest("/api/v1", public.merge(protected))
        .with_state(state)
}

/// Resolve validated claims to the caller context the services
/// accept.
pub(crate) fn auth_context(claims: &Claims) -> Result<AuthContext, ApiError> {
    claims
        .to_context()
        .map_err(|_| ApiError::Unauthorized("invalid session claims".to_string()))
}
