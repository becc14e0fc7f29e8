//! Startup types and the outcome state machine

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::StartupId;
use crate::constants::{default_multiplier, min_multiplier};
use crate::error::{LedgerError, LedgerResult};

/// Startup outcome.
///
/// `Pending` is the initial state. The transition out of `Pending` is
/// one-way and happens exactly once; any later resolution attempt must
/// be rejected, never re-applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Pending,
    Success,
    Failure,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "SUCCESS" => Some(Self::Success),
            "FAILURE" => Some(Self::Failure),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Parse a resolution target. Only SUCCESS and FAILURE are legal
    /// targets; PENDING is the state being left, not a destination.
    pub fn parse_resolution(s: &str) -> LedgerResult<Self> {
        match Self::parse(s) {
            Some(Self::Success) => Ok(Self::Success),
            Some(Self::Failure) => Ok(Self::Failure),
            _ => Err(LedgerError::Validation(format!("invalid outcome: {}", s))),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An investable startup pitch.
///
/// The outcome is the sole mutable field after creation; the multiplier
/// may also be admin-edited while the outcome is still pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Startup {
    pub id: StartupId,
    pub name: String,
    pub description: String,
    pub pitch: String,
    pub outcome: Outcome,
    /// Payout factor applied on SUCCESS, >= 1.0, fixed-point decimal
    pub multiplier: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Startup {
    /// Create a pending startup, applying the default multiplier when
    /// none is given and validating the floor when one is.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        pitch: impl Into<String>,
        multiplier: Option<Decimal>,
        now: DateTime<Utc>,
    ) -> LedgerResult<Self> {
        let multiplier = multiplier.unwrap_or_else(default_multiplier);
        validate_multiplier(multiplier)?;

        Ok(Self {
            id: StartupId::generate(),
            name: name.into(),
            description: description.into(),
            pitch: pitch.into(),
            outcome: Outcome::Pending,
            multiplier,
            created_at: now,
        })
    }
}

/// Check a multiplier against the game floor.
pub fn validate_multiplier(multiplier: Decimal) -> LedgerResult<()> {
    if multiplier < min_multiplier() {
        return Err(LedgerError::Validation(format!(
            "multiplier must be at least {}, got {}",
            min_multiplier(),
            multiplier
        )));
    }
    Ok(())
}
