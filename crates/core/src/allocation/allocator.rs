//! Amount allocation using the Largest Remainder Method.
//!
//! Distributes a target total across weighted items so that every amount is a
//! whole number of cents and the sum is exactly the target (no cents lost).
//!
//! The Largest Remainder Method works by:
//! 1. Calculate the exact proportional share of each item, in cents
//! 2. Round each share down
//! 3. Calculate the deficit (target - sum of floors)
//! 4. Give one cent to the items with the largest fractional parts, or take
//!    one cent from the items with the smallest ones if the floors overshoot

use rust_decimal::prelude::*;
use salesbook_shared::types::{CENT_PLACES, round_cents};
use tracing::warn;

/// A request to allocate a target total across weights.
///
/// Weights must be non-negative; callers clamp them beforehand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRequest {
    weights: Vec<Decimal>,
    total: Decimal,
}

impl AllocationRequest {
    /// Creates a request from weights and a target total.
    #[must_use]
    pub fn new(weights: Vec<Decimal>, total: Decimal) -> Self {
        Self { weights, total }
    }

    /// The weights, in input order.
    #[must_use]
    pub fn weights(&self) -> &[Decimal] {
        &self.weights
    }

    /// The target total.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Runs the allocation.
    #[must_use]
    pub fn allocate(&self) -> AllocationResult {
        Allocator::allocate(&self.weights, self.total)
    }
}

/// Cent-exact amounts, one per weight, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllocationResult {
    amounts: Vec<Decimal>,
}

impl AllocationResult {
    /// The allocated amounts.
    #[must_use]
    pub fn amounts(&self) -> &[Decimal] {
        &self.amounts
    }

    /// Number of allocated amounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Returns true if nothing was allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Sum of all amounts.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.amounts.iter().copied().sum()
    }

    /// Consumes the result, returning the amounts.
    #[must_use]
    pub fn into_inner(self) -> Vec<Decimal> {
        self.amounts
    }
}

/// Largest-remainder allocator.
///
/// Guarantees:
/// - every amount is a whole number of cents
/// - the sum of allocations EXACTLY equals the target rounded to cents
/// - ties between equal remainders are broken by input order
pub struct Allocator;

impl Allocator {
    /// Allocate `total` proportionally to `weights`.
    ///
    /// A zero weight sum yields all-zero amounts whatever the target.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salesbook_core::allocation::Allocator;
    ///
    /// let result = Allocator::allocate(&[dec!(100), dec!(200), dec!(300)], dec!(100));
    /// assert_eq!(result.amounts(), &[dec!(16.67), dec!(33.33), dec!(50.00)]);
    /// ```
    #[must_use]
    pub fn allocate(weights: &[Decimal], total: Decimal) -> AllocationResult {
        if weights.is_empty() {
            return AllocationResult::default();
        }

        let weight_sum: Decimal = weights.iter().copied().sum();
        if weight_sum.is_zero() {
            return AllocationResult {
                amounts: vec![cents_to_amount(Decimal::ZERO); weights.len()],
            };
        }

        // Work in cents: the target becomes an integer-valued decimal.
        let total_cents = round_cents(total) * Decimal::ONE_HUNDRED;

        // Share ratio first keeps the product within range for large inputs.
        let exact: Vec<Decimal> = weights
            .iter()
            .map(|w| total_cents * (*w / weight_sum))
            .collect();

        let mut cents: Vec<Decimal> = exact.iter().map(Decimal::floor).collect();

        let allocated: Decimal = cents.iter().copied().sum();
        // Bounded by the item count; only a corrupt ratio could leave i64.
        let Some(deficit) = (total_cents - allocated).to_i64() else {
            warn!(%total, %allocated, "Allocation deficit out of range, floors kept");
            return AllocationResult {
                amounts: cents.into_iter().map(cents_to_amount).collect(),
            };
        };

        if deficit != 0 {
            let remainders: Vec<Decimal> = exact
                .iter()
                .zip(cents.iter())
                .map(|(e, f)| *e - *f)
                .collect();

            // Stable sort: equal remainders keep input order.
            // Zero-weight items never take part in the adjustment.
            let mut ranking: Vec<usize> = (0..weights.len())
                .filter(|i| !weights[*i].is_zero())
                .collect();
            ranking.sort_by(|a, b| remainders[*b].cmp(&remainders[*a]));

            let steps = usize::try_from(deficit.unsigned_abs()).unwrap_or(usize::MAX);
            if deficit > 0 {
                for idx in ranking.iter().cycle().take(steps) {
                    cents[*idx] += Decimal::ONE;
                }
            } else {
                for idx in ranking.iter().rev().cycle().take(steps) {
                    cents[*idx] -= Decimal::ONE;
                }
            }
        }

        AllocationResult {
            amounts: cents.into_iter().map(cents_to_amount).collect(),
        }
    }
}

fn cents_to_amount(cents: Decimal) -> Decimal {
    let mut amount = cents / Decimal::ONE_HUNDRED;
    amount.rescale(CENT_PLACES);
    amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_allocate_empty() {
        let result = Allocator::allocate(&[], dec!(100));
        assert!(result.is_empty());
    }

    #[test]
    fn test_allocate_single() {
        let result = Allocator::allocate(&[dec!(42)], dec!(99.99));
        assert_eq!(result.amounts(), &[dec!(99.99)]);
    }

    #[test]
    fn test_allocate_proportional_thirds() {
        // 10000 cents over 1:2:3 -> 1666.67 / 3333.33 / 5000
        let result = Allocator::allocate(&[dec!(100), dec!(200), dec!(300)], dec!(100.00));
        assert_eq!(result.amounts(), &[dec!(16.67), dec!(33.33), dec!(50.00)]);
        assert_eq!(result.total(), dec!(100.00));
    }

    #[test]
    fn test_allocate_zero_weights() {
        let result = Allocator::allocate(&[dec!(0), dec!(0)], dec!(50.00));
        assert_eq!(result.amounts(), &[dec!(0.00), dec!(0.00)]);
    }

    #[test]
    fn test_allocate_ties_follow_input_order() {
        // 100 / 3: every remainder is equal, the first item gets the cent
        let result = Allocator::allocate(&[dec!(1), dec!(1), dec!(1)], dec!(1.00));
        assert_eq!(result.amounts(), &[dec!(0.34), dec!(0.33), dec!(0.33)]);
    }

    #[test]
    fn test_allocate_largest_remainder_wins() {
        // Shares in cents: 14.2857.., 28.5714.., 57.1428.. -> floors 14, 28, 57 = 99
        let result = Allocator::allocate(&[dec!(1), dec!(2), dec!(4)], dec!(1.00));
        assert_eq!(result.amounts(), &[dec!(0.14), dec!(0.29), dec!(0.57)]);
    }

    #[test]
    fn test_allocate_negative_target() {
        let result = Allocator::allocate(&[dec!(1), dec!(1), dec!(1)], dec!(-1.00));
        assert_eq!(result.total(), dec!(-1.00));
        assert_eq!(result.amounts(), &[dec!(-0.33), dec!(-0.33), dec!(-0.34)]);
    }

    #[test]
    fn test_allocate_rounds_target_to_cents() {
        let result = Allocator::allocate(&[dec!(1), dec!(3)], dec!(10.005));
        assert_eq!(result.total(), dec!(10.00));
    }

    #[test]
    fn test_allocate_zero_weight_items_receive_nothing() {
        let result = Allocator::allocate(&[dec!(0), dec!(5), dec!(0)], dec!(12.34));
        assert_eq!(result.amounts(), &[dec!(0.00), dec!(12.34), dec!(0.00)]);
    }

    #[test]
    fn test_allocate_amounts_carry_two_decimals() {
        let result = Allocator::allocate(&[dec!(1), dec!(1)], dec!(10));
        for amount in result.amounts() {
            assert_eq!(amount.scale(), 2);
        }
    }

    #[test]
    fn test_request_allocates_its_weights() {
        let request = AllocationRequest::new(vec![dec!(1), dec!(1)], dec!(1000));
        assert_eq!(request.weights(), &[dec!(1), dec!(1)]);
        assert_eq!(request.allocate().amounts(), &[dec!(500.00), dec!(500.00)]);
    }

    #[test]
    fn test_allocate_large_target_conserves_cents() {
        let total = dec!(100000000000000000000);
        let result = Allocator::allocate(&[dec!(1), dec!(1), dec!(1)], total);
        assert_eq!(result.total(), total);
        assert_eq!(result.amounts()[0] - result.amounts()[1], dec!(0.01));
    }
}
