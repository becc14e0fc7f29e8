//! Outcome resolution and payout application

use std::sync::Arc;

use rust_decimal::Decimal;

use venture_core::{AuthContext, LedgerError, LedgerResult, Outcome, StartupId};

use crate::store::{LedgerStore, ResolutionRecord};

/// Outcome resolution service
pub struct ResolutionService {
    store: Arc<dyn LedgerStore>,
}

impl ResolutionService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Resolve a startup to SUCCESS or FAILURE.
    ///
    /// Admin only. The store commit re-checks PENDING as its write
    /// guard, so a concurrent duplicate call loses with
    /// `StateConflict` and applies nothing. On SUCCESS the record
    /// carries one payout per investment, each credited exactly once.
    pub async fn resolve(
        &self,
        ctx: &AuthContext,
        startup_id: &StartupId,
        outcome: Outcome,
    ) -> LedgerResult<ResolutionRecord> {
        ctx.require_admin()?;

        if outcome.is_pending() {
            return Err(LedgerError::Validation(
                "PENDING is not a valid resolution target".to_string(),
            ));
        }

        let record = self.store.commit_resolution(startup_id, outcome).await?;

        let total: Decimal = record.payouts.iter().map(|p| p.amount).sum();
        tracing::info!(
            startup_id = %record.startup.id,
            outcome = %record.startup.outcome,
            payout_count = record.payouts.len(),
            total_payout = %total,
            "startup resolved"
        );

        Ok(record)
    }
}
