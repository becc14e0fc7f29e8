//! In-memory ledger store
//!
//! The whole ledger lives behind one `RwLock`; each mutating method
//! holds the write guard from its first precondition check to its last
//! write, which makes every method a serializable transaction. Two
//! racing resolutions of one startup, or two racing investments
//! against one balance, can never both pass their guards.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use venture_core::{
    payout::payout_amount, Investment, InvestmentId, LedgerError, LedgerResult, Outcome, Payout,
    Startup, StartupId, Team, TeamId, TeamStanding, User, UserId,
};

use super::{
    InvestmentDetail, LedgerStore, PlacedInvestment, ResolutionRecord, StartupDetail, TeamDetail,
};

/// Ledger state guarded by the store lock.
///
/// The `*_order` vectors record insertion order; listings derive
/// newest-first and tie-break ordering from them.
#[derive(Debug, Default)]
struct LedgerState {
    teams: HashMap<TeamId, Team>,
    team_order: Vec<TeamId>,
    team_name_index: HashMap<String, TeamId>,
    users: HashMap<UserId, User>,
    email_index: HashMap<String, UserId>,
    startups: HashMap<StartupId, Startup>,
    startup_order: Vec<StartupId>,
    investments: HashMap<InvestmentId, Investment>,
    investment_order: Vec<InvestmentId>,
}

impl LedgerState {
    fn investments_for_startup(&self, startup_id: &StartupId) -> Vec<&Investment> {
        self.investment_order
            .iter()
            .filter_map(|id| self.investments.get(id))
            .filter(|inv| &inv.startup_id == startup_id)
            .collect()
    }

    fn investment_details_for_team(&self, team_id: &TeamId) -> LedgerResult<Vec<InvestmentDetail>> {
        // Newest first
        self.investment_order
            .iter()
            .rev()
            .filter_map(|id| self.investments.get(id))
            .filter(|inv| &inv.team_id == team_id)
            .map(|inv| {
                let startup = self
                    .startups
                    .get(&inv.startup_id)
                    .cloned()
                    .ok_or_else(|| {
                        LedgerError::Storage(format!(
                            "investment {} references missing startup {}",
                            inv.id, inv.startup_id
                        ))
                    })?;
                Ok(InvestmentDetail {
                    investment: inv.clone(),
                    startup,
                })
            })
            .collect()
    }
}

/// Thread-safe in-memory ledger store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<LedgerState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    // ==================== Accounts ====================

    async fn create_account(&self, team: Team, user: User) -> LedgerResult<(Team, User)> {
        let mut state = self.state.write().await;

        if state.email_index.contains_key(&user.email) {
            return Err(LedgerError::AlreadyExists(format!(
                "user with email {} already exists",
                user.email
            )));
        }
        if state.team_name_index.contains_key(&team.name) {
            return Err(LedgerError::AlreadyExists(format!(
                "team name {} already taken",
                team.name
            )));
        }

        state
            .team_name_index
            .insert(team.name.clone(), team.id.clone());
        state.team_order.push(team.id.clone());
        state.teams.insert(team.id.clone(), team.clone());

        state.email_index.insert(user.email.clone(), user.id.clone());
        state.users.insert(user.id.clone(), user.clone());

        Ok((team, user))
    }

    async fn insert_user(&self, user: User) -> LedgerResult<User> {
        let mut state = self.state.write().await;

        if state.email_index.contains_key(&user.email) {
            return Err(LedgerError::AlreadyExists(format!(
                "user with email {} already exists",
                user.email
            )));
        }

        state.email_index.insert(user.email.clone(), user.id.clone());
        state.users.insert(user.id.clone(), user.clone());

        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> LedgerResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.get(id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> LedgerResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .email_index
            .get(email)
            .and_then(|id| state.users.get(id))
            .cloned())
    }

    // ==================== Teams ====================

    async fn get_team(&self, id: &TeamId) -> LedgerResult<Option<Team>> {
        let state = self.state.read().await;
        Ok(state.teams.get(id).cloned())
    }

    async fn list_team_standings(&self) -> LedgerResult<Vec<TeamStanding>> {
        let state = self.state.read().await;

        let mut standings: Vec<TeamStanding> = state
            .team_order
            .iter()
            .filter_map(|id| state.teams.get(id))
            .map(|team| TeamStanding {
                id: team.id.clone(),
                name: team.name.clone(),
                balance: team.balance,
                member_count: state
                    .users
                    .values()
                    .filter(|u| u.team_id.as_ref() == Some(&team.id))
                    .count() as u64,
                investment_count: state
                    .investments
                    .values()
                    .filter(|inv| inv.team_id == team.id)
                    .count() as u64,
            })
            .collect();

        // Stable sort keeps creation order among equal balances
        standings.sort_by(|a, b| b.balance.cmp(&a.balance));

        Ok(standings)
    }

    async fn list_team_details(&self) -> LedgerResult<Vec<TeamDetail>> {
        let state = self.state.read().await;

        state
            .team_order
            .iter()
            .filter_map(|id| state.teams.get(id))
            .map(|team| {
                let users = state
                    .users
                    .values()
                    .filter(|u| u.team_id.as_ref() == Some(&team.id))
                    .cloned()
                    .collect();
                let investments = state.investment_details_for_team(&team.id)?;
                Ok(TeamDetail {
                    team: team.clone(),
                    users,
                    investments,
                })
            })
            .collect()
    }

    // ==================== Startups ====================

    async fn insert_startup(&self, startup: Startup) -> LedgerResult<Startup> {
        let mut state = self.state.write().await;
        state.startup_order.push(startup.id.clone());
        state.startups.insert(startup.id.clone(), startup.clone());
        Ok(startup)
    }

    async fn get_startup(&self, id: &StartupId) -> LedgerResult<Option<Startup>> {
        let state = self.state.read().await;
        Ok(state.startups.get(id).cloned())
    }

    async fn list_pending_startups(&self) -> LedgerResult<Vec<Startup>> {
        let state = self.state.read().await;
        Ok(state
            .startup_order
            .iter()
            .rev()
            .filter_map(|id| state.startups.get(id))
            .filter(|s| s.outcome.is_pending())
            .cloned()
            .collect())
    }

    async fn list_startup_details(&self) -> LedgerResult<Vec<StartupDetail>> {
        let state = self.state.read().await;
        Ok(state
            .startup_order
            .iter()
            .filter_map(|id| state.startups.get(id))
            .map(|startup| StartupDetail {
                startup: startup.clone(),
                investments: state
                    .investments_for_startup(&startup.id)
                    .into_iter()
                    .cloned()
                    .collect(),
            })
            .collect())
    }

    async fn update_multiplier(
        &self,
        id: &StartupId,
        multiplier: Decimal,
    ) -> LedgerResult<Startup> {
        let mut state = self.state.write().await;

        let startup = state
            .startups
            .get_mut(id)
            .ok_or_else(|| LedgerError::not_found("Startup", id))?;

        if !startup.outcome.is_pending() {
            return Err(LedgerError::StateConflict(format!(
                "startup {} already resolved to {}",
                id, startup.outcome
            )));
        }

        startup.multiplier = multiplier;
        Ok(startup.clone())
    }

    // ==================== Investments ====================

    async fn list_investments_for_team(
        &self,
        team_id: &TeamId,
    ) -> LedgerResult<Vec<InvestmentDetail>> {
        let state = self.state.read().await;
        state.investment_details_for_team(team_id)
    }

    // ==================== Transactions ====================

    async fn commit_investment(
        &self,
        team_id: &TeamId,
        startup_id: &StartupId,
        amount: Decimal,
        now: DateTime<Utc>,
    ) -> LedgerResult<PlacedInvestment> {
        let mut state = self.state.write().await;

        let startup = state
            .startups
            .get(startup_id)
            .cloned()
            .ok_or_else(|| LedgerError::not_found("Startup", startup_id))?;

        if !startup.outcome.is_pending() {
            return Err(LedgerError::StateConflict(format!(
                "cannot invest in startup {} with outcome {}",
                startup_id, startup.outcome
            )));
        }

        let team = state
            .teams
            .get_mut(team_id)
            .ok_or_else(|| LedgerError::not_found("Team", team_id))?;

        if team.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: team.balance,
            });
        }

        team.balance -= amount;
        let team = team.clone();

        let investment = Investment::new(team_id.clone(), startup_id.clone(), amount, now);
        state.investment_order.push(investment.id.clone());
        state
            .investments
            .insert(investment.id.clone(), investment.clone());

        Ok(PlacedInvestment {
            investment,
            startup,
            team,
        })
    }

    async fn commit_resolution(
        &self,
        startup_id: &StartupId,
        outcome: Outcome,
    ) -> LedgerResult<ResolutionRecord> {
        let mut state = self.state.write().await;

        let startup = state
            .startups
            .get(startup_id)
            .ok_or_else(|| LedgerError::not_found("Startup", startup_id))?;

        // Conditional-update guard: the transition out of PENDING
        // happens at most once, whichever caller gets here first.
        if !startup.outcome.is_pending() {
            return Err(LedgerError::StateConflict(format!(
                "startup {} already resolved to {}",
                startup_id, startup.outcome
            )));
        }

        // Compute the payout set before touching anything, using the
        // multiplier stored on the startup row.
        let multiplier = startup.multiplier;
        let credits: Vec<(TeamId, Decimal)> = if outcome == Outcome::Success {
            state
                .investments_for_startup(startup_id)
                .iter()
                .map(|inv| (inv.team_id.clone(), payout_amount(inv.amount, multiplier)))
                .collect()
        } else {
            Vec::new()
        };

        // Verify every credited team exists before the first write, so
        // a referential break cannot leave the payout set half applied.
        for (team_id, _) in &credits {
            if !state.teams.contains_key(team_id) {
                return Err(LedgerError::Storage(format!(
                    "investment references missing team {}",
                    team_id
                )));
            }
        }

        let startup = state
            .startups
            .get_mut(startup_id)
            .ok_or_else(|| LedgerError::not_found("Startup", startup_id))?;
        startup.outcome = outcome;
        let startup = startup.clone();

        let mut payouts = Vec::with_capacity(credits.len());
        for (team_id, amount) in credits {
            if let Some(team) = state.teams.get_mut(&team_id) {
                team.balance += amount;
            }
            payouts.push(Payout { team_id, amount });
        }

        Ok(ResolutionRecord { startup, payouts })
    }
}
