//! Application state for the API server

use std::sync::Arc;

use venture_ledger::{
    AccountService, InvestmentService, LedgerStore, ResolutionService, StartupService,
    TeamService,
};

use crate::auth::AuthState;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Account service (register, login, admin creation)
    pub accounts: Arc<AccountService>,
    /// Startup administration and listings
    pub startups: Arc<StartupService>,
    /// Investment placement
    pub investments: Arc<InvestmentService>,
    /// Outcome resolution
    pub resolutions: Arc<ResolutionService>,
    /// Team queries and leaderboard
    pub teams: Arc<TeamService>,
    /// JWT auth state
    pub auth: AuthState,
    /// API version
    pub version: String,
}

impl AppState {
    /// Create app state over a ledger store.
    pub fn new(store: Arc<dyn LedgerStore>, auth: AuthState) -> Self {
        Self {
            accounts: Arc::new(AccountService::new(store.clone())),
            startups: Arc::new(StartupService::new(store.clone())),
            investments: Arc::new(InvestmentService::new(store.clone())),
            resolutions: Arc::new(ResolutionService::new(store.clone())),
            teams: Arc::new(TeamService::new(store)),
            auth,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    /// HS256 secret for session tokens, at least 32 bytes
    pub jwt_secret: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            enable_cors: true,
            jwt_secret: String::new(),
        }
    }
}
