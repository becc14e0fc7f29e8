//! Venture Ledger - persistence and game services
//!
//! The `LedgerStore` trait is the durable substrate for teams, users,
//! startups and investments; every mutating method is one serializable
//! transaction, so precondition checks and writes can never be split
//! across interleavings. `MemoryStore` is the in-process implementation.
//!
//! The service layer on top orchestrates the game operations (accounts,
//! startup administration, investment placement, outcome resolution,
//! queries) against an already-authenticated caller context.

pub mod password;
pub mod services;
pub mod store;

pub use services::{
    AccountService, InvestmentService, ResolutionService, StartupService, TeamService,
};
pub use store::{
    InvestmentDetail, LedgerStore, MemoryStore, PlacedInvestment, ResolutionRecord,
    StartupDetail, TeamDetail,
};
