//! Game Constants
//!
//! Centralized constants for the investment game. All game-defined
//! amounts and limits live here for consistency.

use rust_decimal::Decimal;

/// Balance granted to every team at registration (1,000,000 units).
pub fn starting_balance() -> Decimal {
    Decimal::new(1_000_000, 0)
}

/// Multiplier applied to a startup created without an explicit one.
pub fn default_multiplier() -> Decimal {
    Decimal::new(20, 1)
}

/// Lowest multiplier an admin may set on a startup.
pub fn min_multiplier() -> Decimal {
    Decimal::new(10, 1)
}
