//! Team queries: snapshot, history, leaderboard

use std::sync::Arc;

use venture_core::{AuthContext, LedgerError, LedgerResult, Team, TeamStanding};

use crate::store::{InvestmentDetail, LedgerStore, TeamDetail};

/// Team query service
pub struct TeamService {
    store: Arc<dyn LedgerStore>,
}

impl TeamService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// The caller's own team with its investment history, newest
    /// first.
    pub async fn snapshot(
        &self,
        ctx: &AuthContext,
    ) -> LedgerResult<(Team, Vec<InvestmentDetail>)> {
        let team_id = ctx.require_team()?;

        let team = self
            .store
            .get_team(team_id)
            .await?
            .ok_or_else(|| LedgerError::not_found("Team", team_id))?;

        let investments = self.store.list_investments_for_team(team_id).await?;

        Ok((team, investments))
    }

    /// All teams ordered by balance descending, creation order on
    /// ties.
    pub async fn leaderboard(&self) -> LedgerResult<Vec<TeamStanding>> {
        self.store.list_team_standings().await
    }

    /// Admin listing of every team with members and history.
    pub async fn list_details(&self, ctx: &AuthContext) -> LedgerResult<Vec<TeamDetail>> {
        ctx.require_admin()?;
        self.store.list_team_details().await
    }
}
