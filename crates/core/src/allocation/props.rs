//! Property-based tests for the largest-remainder allocator.
//!
//! - Property 1: Allocation conservation
//! - Property 2: Non-negativity under non-negative inputs
//! - Property 3: Determinism

use proptest::prelude::*;
use rust_decimal::Decimal;
use salesbook_shared::types::{is_cent_exact, round_cents};

use super::allocator::Allocator;

/// Strategy to generate non-negative weights (0.00 to 100,000.00), some zero.
fn weights() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(
        prop_oneof![
            1 => Just(Decimal::ZERO),
            4 => (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        ],
        0..60,
    )
}

/// Strategy to generate signed targets with up to 3 decimals.
fn signed_total() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|mills| Decimal::new(mills, 3))
}

/// Strategy to generate non-negative cent targets.
fn non_negative_total() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Property 1: Allocation conservation
    // =========================================================================

    /// *For any* weights with a non-zero sum and any target, the allocated
    /// amounts SHALL sum to the target rounded to cents.
    #[test]
    fn prop_sum_equals_rounded_target(
        weights in weights(),
        total in signed_total(),
    ) {
        let result = Allocator::allocate(&weights, total);
        prop_assert_eq!(result.len(), weights.len());

        let weight_sum: Decimal = weights.iter().copied().sum();
        if weight_sum.is_zero() {
            prop_assert!(result.amounts().iter().all(Decimal::is_zero));
        } else {
            prop_assert_eq!(result.total(), round_cents(total));
        }
    }

    /// *For any* input, every allocated amount SHALL be a whole number of cents.
    #[test]
    fn prop_amounts_are_cent_exact(
        weights in weights(),
        total in signed_total(),
    ) {
        let result = Allocator::allocate(&weights, total);
        for amount in result.amounts() {
            prop_assert!(is_cent_exact(*amount), "{} is not cent-exact", amount);
        }
    }

    /// *For any* allocation, each amount SHALL be within one cent of its
    /// exact proportional share.
    #[test]
    fn prop_amounts_stay_within_a_cent_of_share(
        weights in weights(),
        total in non_negative_total(),
    ) {
        let weight_sum: Decimal = weights.iter().copied().sum();
        prop_assume!(!weight_sum.is_zero());

        let result = Allocator::allocate(&weights, total);
        let cent = Decimal::new(1, 2);
        for (weight, amount) in weights.iter().zip(result.amounts()) {
            let share = total * (*weight / weight_sum);
            prop_assert!((*amount - share).abs() < cent + cent);
        }
    }

    // =========================================================================
    // Property 2: Non-negativity
    // =========================================================================

    /// *For any* non-negative weights and non-negative target, every amount
    /// SHALL be non-negative.
    #[test]
    fn prop_non_negative_inputs_non_negative_amounts(
        weights in weights(),
        total in non_negative_total(),
    ) {
        let result = Allocator::allocate(&weights, total);
        prop_assert!(result.amounts().iter().all(|a| *a >= Decimal::ZERO));
    }

    /// *For any* weights, items with zero weight SHALL receive nothing.
    #[test]
    fn prop_zero_weight_receives_nothing(
        weights in weights(),
        total in signed_total(),
    ) {
        let result = Allocator::allocate(&weights, total);
        for (weight, amount) in weights.iter().zip(result.amounts()) {
            if weight.is_zero() {
                prop_assert!(amount.is_zero());
            }
        }
    }

    // =========================================================================
    // Property 3: Determinism
    // =========================================================================

    /// *For any* input, allocating twice SHALL produce identical output.
    #[test]
    fn prop_allocation_is_deterministic(
        weights in weights(),
        total in signed_total(),
    ) {
        let first = Allocator::allocate(&weights, total);
        let second = Allocator::allocate(&weights, total);
        prop_assert_eq!(first, second);
    }
}
