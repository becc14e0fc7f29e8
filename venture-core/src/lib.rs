//! Venture Core - domain model for the investment simulation game
//!
//! This crate defines the entities shared by every layer of the game:
//! teams, users, startups and investments, the outcome state machine,
//! the error taxonomy, and the pure payout calculation. It carries no
//! I/O; storage and HTTP live in `venture-ledger` and `venture-api`.

pub mod constants;
pub mod error;
pub mod payout;
pub mod types;

pub use constants::*;
pub use error::*;
pub use types::*;
