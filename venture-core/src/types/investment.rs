//! Investment types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{InvestmentId, StartupId, TeamId};

/// A recorded allocation of funds from a team to a startup.
///
/// Immutable once created; the owning team has already been debited by
/// the same transaction that created it. Multiple investments per
/// (team, startup) pair are allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    pub id: InvestmentId,
    pub team_id: TeamId,
    pub startup_id: StartupId,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Investment {
    pub fn new(
        team_id: TeamId,
        startup_id: StartupId,
        amount: Decimal,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: InvestmentId::generate(),
            team_id,
            startup_id,
            amount,
            created_at: now,
        }
    }
}

/// One team's share of a SUCCESS resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payout {
    pub team_id: TeamId,
    pub amount: Decimal,
}
