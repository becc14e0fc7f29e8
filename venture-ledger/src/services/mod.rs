//! Game services
//!
//! Orchestration over the ledger store. Each service accepts an
//! already-authenticated `AuthContext` and performs its own role and
//! input validation before touching the store; the store transactions
//! enforce the state-dependent guards.

pub mod account_service;
pub mod investment_service;
pub mod resolution_service;
pub mod startup_service;
pub mod team_service;

pub use account_service::AccountService;
pub use investment_service::InvestmentService;
pub use resolution_service::ResolutionService;
pub use startup_service::StartupService;
pub use team_service::TeamService;
