//! Error types for the venture domain

use rust_decimal::Decimal;
use thiserror::Error;

/// Ledger operation errors
///
/// Every fallible operation in the game reports one of these. Validation
/// failures are detected before any write; `Storage` wraps substrate
/// failures after the whole transaction has been rolled back.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("State conflict: {0}")]
    StateConflict(String),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Convenience constructor for missing entities
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{} {} not found", entity, id))
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
