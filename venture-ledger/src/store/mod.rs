//! Ledger storage layer
//!
//! Defines the storage operations the game needs. Contract:
//!
//! - Every mutating method is one atomic transaction: its precondition
//!   checks and its writes happen under the same guard, and an error
//!   leaves state untouched.
//! - `commit_investment` is the compare-and-decrement for team
//!   balances; `commit_resolution` carries the conditional
//!   outcome-is-still-PENDING guard that makes duplicate resolution
//!   impossible.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use venture_core::{
    Investment, LedgerResult, Outcome, Payout, Startup, StartupId, Team, TeamId, TeamStanding,
    User, UserId,
};

/// Result of a committed investment placement: the new row, the startup
/// it targets, and the team after the debit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedInvestment {
    pub investment: Investment,
    pub startup: Startup,
    pub team: Team,
}

/// Result of a committed resolution: the startup after the outcome
/// flip and the payouts applied (empty for FAILURE).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionRecord {
    pub startup: Startup,
    pub payouts: Vec<Payout>,
}

/// An investment joined with a snapshot of its startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentDetail {
    pub investment: Investment,
    pub startup: Startup,
}

/// Admin view of a startup with every investment it attracted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupDetail {
    pub startup: Startup,
    pub investments: Vec<Investment>,
}

/// Admin view of a team with its members and investment history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamDetail {
    pub team: Team,
    pub users: Vec<User>,
    pub investments: Vec<InvestmentDetail>,
}

/// Ledger storage interface
#[async_trait]
pub trait LedgerStore: Send + Sync {
    // ==================== Accounts ====================

    /// Create a team and its first user atomically. Fails with
    /// `AlreadyExists` on a duplicate email or team name.
    async fn create_account(&self, team: Team, user: User) -> LedgerResult<(Team, User)>;

    /// Insert a standalone user (admin creation). Fails with
    /// `AlreadyExists` on a duplicate email.
    async fn insert_user(&self, user: User) -> LedgerResult<User>;

    async fn get_user(&self, id: &UserId) -> LedgerResult<Option<User>>;

    async fn get_user_by_email(&self, email: &str) -> LedgerResult<Option<User>>;

    // ==================== Teams ====================

    async fn get_team(&self, id: &TeamId) -> LedgerResult<Option<Team>>;

    /// All teams ordered by balance descending, ties broken by team
    /// creation order, annotated with member and investment counts.
    async fn list_team_standings(&self) -> LedgerResult<Vec<TeamStanding>>;

    /// Admin listing: every team with its users and investments.
    async fn list_team_details(&self) -> LedgerResult<Vec<TeamDetail>>;

    // ==================== Startups ====================

    async fn insert_startup(&self, startup: Startup) -> LedgerResult<Startup>;

    async fn get_startup(&self, id: &StartupId) -> LedgerResult<Option<Startup>>;

    /// Startups still open for investment, newest first.
    async fn list_pending_startups(&self) -> LedgerResult<Vec<Startup>>;

    /// Admin listing: every startup with its investments.
    async fn list_startup_details(&self) -> LedgerResult<Vec<StartupDetail>>;

    /// Set the multiplier of a still-pending startup. Conditional
    /// update: fails with `StateConflict` once the outcome has left
    /// PENDING.
    async fn update_multiplier(
        &self,
        id: &StartupId,
        multiplier: Decimal,
    ) -> LedgerResult<Startup>;

    // ==================== Investments ====================

    /// A team's investments, newest first, each with its startup.
    async fn list_investments_for_team(
        &self,
        team_id: &TeamId,
    ) -> LedgerResult<Vec<InvestmentDetail>>;

    // ==================== Transactions ====================

    /// Atomically create an investment and debit the owning team.
    ///
    /// Inside one transaction: the startup must exist and still be
    /// PENDING, the team must exist, and the balance must cover the
    /// amount (compare-and-decrement). No partial state on failure.
    async fn commit_investment(
        &self,
        team_id: &TeamId,
        startup_id: &StartupId,
        amount: Decimal,
        now: DateTime<Utc>,
    ) -> LedgerResult<PlacedInvestment>;

    /// Atomically resolve a startup and apply payouts.
    ///
    /// Inside one transaction: the outcome update is guarded on the
    /// current outcome still being PENDING (the loser of a concurrent
    /// race gets `StateConflict`); on SUCCESS every investment in the
    /// startup is found and its owning team credited
    /// `payout_amount(investment.amount, startup.multiplier)` exactly
    /// once, using the multiplier stored on the startup row. FAILURE
    /// changes no balances.
    async fn commit_resolution(
        &self,
        startup_id: &StartupId,
        outcome: Outcome,
    ) -> LedgerResult<ResolutionRecord>;
}
