//! Team types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::TeamId;
use crate::constants::starting_balance;

/// A team of users sharing one balance and one set of investments.
///
/// The balance changes only through investment placement (debit) and
/// outcome resolution (credit), each inside a single store transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Unique team name chosen at registration
    pub name: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Create a team with the game's starting balance.
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: TeamId::generate(),
            name: name.into(),
            balance: starting_balance(),
            created_at: now,
        }
    }
}

/// Leaderboard entry: a team annotated with its member and investment
/// counts, ordered by balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamStanding {
    pub id: TeamId,
    pub name: String,
    pub balance: Decimal,
    pub member_count: u64,
    pub investment_count: u64,
}
