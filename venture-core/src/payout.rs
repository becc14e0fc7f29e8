//! Payout Calculation
//!
//! Pure arithmetic for resolving successful startups. The multiplier is
//! always the value stored on the startup row being resolved, so
//! admin adjustments made while the startup was still pending take
//! effect at resolution time.

use rust_decimal::Decimal;

/// Payout credited to a team for one investment on a SUCCESS resolution.
pub fn payout_amount(amount: Decimal, multiplier: Decimal) -> Decimal {
    amount * multiplier
}
