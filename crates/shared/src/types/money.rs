//! Cent-precision helpers for monetary amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every amount is a `rust_decimal::Decimal` quantized to cents.

use rust_decimal::prelude::*;

/// Number of decimal places of the working currency.
pub const CENT_PLACES: u32 = 2;

/// Rounds an amount to cents using Banker's Rounding.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salesbook_shared::types::round_cents;
///
/// assert_eq!(round_cents(dec!(52.255)), dec!(52.26));
/// assert_eq!(round_cents(dec!(52.245)), dec!(52.24));
/// ```
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointNearestEven)
}

/// Returns true if the amount carries no sub-cent part.
#[must_use]
pub fn is_cent_exact(amount: Decimal) -> bool {
    round_cents(amount) == amount
}

/// Formats an amount with exactly two decimals (`105.5` -> `"105.50"`).
#[must_use]
pub fn format_cents(amount: Decimal) -> String {
    let mut rounded = round_cents(amount);
    rounded.rescale(CENT_PLACES);
    rounded.to_string()
}
