//! Venture API - HTTP surface for the investment game
//!
//! axum router over the venture-ledger services: public registration
//! and login endpoints mint JWT bearer tokens; everything else runs
//! behind the auth middleware, which resolves the token to an
//! authenticated caller context before the game services are invoked.

pub mod auth;
pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use auth::{AuthState, JwtConfig};
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use server::{create_server, run_server, serve, start_background_server};
pub use state::{ApiConfig, AppState};
