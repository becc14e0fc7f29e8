//! Investment placement

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use venture_core::{AuthContext, LedgerError, LedgerResult, StartupId};

use crate::store::{LedgerStore, PlacedInvestment};

/// Investment placement service
pub struct InvestmentService {
    store: Arc<dyn LedgerStore>,
}

impl InvestmentService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Place an investment for the caller's team.
    ///
    /// Input validation happens before any write; the store commit
    /// then atomically creates the investment and debits the team,
    /// guarded on the startup still being PENDING and the balance
    /// covering the amount.
    pub async fn place(
        &self,
        ctx: &AuthContext,
        startup_id: &StartupId,
        amount: Decimal,
    ) -> LedgerResult<PlacedInvestment> {
        let team_id = ctx.require_team()?.clone();

        if amount <= Decimal::ZERO {
            return Err(LedgerError::Validation(
                "investment amount must be positive".to_string(),
            ));
        }

        let placed = self
            .store
            .commit_investment(&team_id, startup_id, amount, Utc::now())
            .await?;

        tracing::info!(
            team_id = %team_id,
            startup_id = %startup_id,
            amount = %amount,
            balance = %placed.team.balance,
            "investment placed"
        );

        Ok(placed)
    }
}
