//! Property-based tests for LedgerService.
//!
//! - Property 1: Journal Balance Integrity
//! - Property 2: Per-Date Balance
//! - Property 3: Commission Conservation
//! - Property 4: Generation Determinism

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::balance::balances_by_date;
use super::service::LedgerService;
use super::types::{AccountMap, PostingParams, ReversalPolicy};
use crate::allocation::CommissionBasis;
use crate::sales::LineItem;
use crate::session::testing::StaticSession;

/// Strategy to generate signed cent amounts (-1,000.00 to 10,000.00).
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-100_000i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate non-negative commission totals (0.00 to 5,000.00).
fn commission_total() -> impl Strategy<Value = Decimal> {
    (0i64..500_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn line_item_strategy() -> impl Strategy<Value = LineItem> {
    (
        "[0-9]{13}",
        signed_amount(),
        signed_amount(),
        signed_amount(),
        signed_amount(),
    )
        .prop_map(|(id, gross, returns, net, invoiced)| {
            LineItem::new(id, gross, returns, net, invoiced)
        })
}

fn reversal_strategy() -> impl Strategy<Value = ReversalPolicy> {
    prop_oneof![
        Just(ReversalPolicy::Disabled),
        (1u32..=12).prop_map(ReversalPolicy::MonthEndAfter),
    ]
}

fn make_params(
    distribution: Decimal,
    diffusion: Decimal,
    reversal: ReversalPolicy,
) -> PostingParams {
    PostingParams {
        posting_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        journal_code: "VT".to_string(),
        label: "VENTES BLDD".to_string(),
        analytic_family: "EDITION".to_string(),
        vat_rate: Decimal::new(55, 3),
        provision_rate: Decimal::new(10, 2),
        reversal,
        prior_provision_reversal: None,
        distribution: CommissionBasis::FixedTotal(distribution),
        diffusion: CommissionBasis::FixedTotal(diffusion),
        accounts: AccountMap::default(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 1: Generated journals always balance.
    ///
    /// *For any* extract, total debits SHALL equal total credits.
    #[test]
    fn prop_generated_journal_balances(
        items in prop::collection::vec(line_item_strategy(), 0..20),
        distribution in commission_total(),
        diffusion in commission_total(),
        reversal in reversal_strategy(),
    ) {
        let params = make_params(distribution, diffusion, reversal);
        let run = LedgerService::generate(&StaticSession(true), &items, &params).unwrap();
        let totals = run.journal.totals();
        prop_assert!(totals.is_balanced);
        prop_assert_eq!(totals.debit, totals.credit);
    }

    /// Property 2: Every posting date balances on its own.
    #[test]
    fn prop_each_date_balances(
        items in prop::collection::vec(line_item_strategy(), 1..20),
        reversal in reversal_strategy(),
    ) {
        let params = make_params(Decimal::new(100_000, 2), Decimal::new(50_000, 2), reversal);
        let run = LedgerService::generate(&StaticSession(true), &items, &params).unwrap();
        for balance in balances_by_date(run.journal.lines()) {
            prop_assert!(balance.imbalance().is_zero(), "date {} is unbalanced", balance.date);
        }
    }

    /// Property 3: Commission lines carry exactly the allocated total.
    ///
    /// *For any* extract with at least one positive weight, the distribution
    /// commission debits SHALL sum to the configured total.
    #[test]
    fn prop_commission_lines_sum_to_total(
        items in prop::collection::vec(line_item_strategy(), 1..20),
        distribution in commission_total(),
    ) {
        prop_assume!(items.iter().any(|i| i.gross_sales() > Decimal::ZERO));

        let params = make_params(distribution, Decimal::ZERO, ReversalPolicy::Disabled);
        let run = LedgerService::generate(&StaticSession(true), &items, &params).unwrap();
        let posted: Decimal = run
            .journal
            .iter()
            .filter(|l| l.account == params.accounts.distribution_commission)
            .map(|l| l.debit() - l.credit())
            .sum();
        prop_assert_eq!(posted, distribution);
        prop_assert_eq!(run.distribution.total(), distribution);
    }

    /// Property 4: Same inputs, same journal.
    #[test]
    fn prop_generation_is_deterministic(
        items in prop::collection::vec(line_item_strategy(), 0..10),
        distribution in commission_total(),
        reversal in reversal_strategy(),
    ) {
        let params = make_params(distribution, Decimal::ZERO, reversal);
        let first = LedgerService::generate(&StaticSession(true), &items, &params).unwrap();
        let second = LedgerService::generate(&StaticSession(true), &items, &params).unwrap();
        prop_assert_eq!(first.journal, second.journal);
    }

    /// Every emitted line has exactly one non-zero side.
    #[test]
    fn prop_lines_have_one_side(
        items in prop::collection::vec(line_item_strategy(), 0..10),
    ) {
        let params = make_params(Decimal::new(1000, 2), Decimal::new(1000, 2), ReversalPolicy::MonthEndAfter(6));
        let run = LedgerService::generate(&StaticSession(true), &items, &params).unwrap();
        for line in &run.journal {
            prop_assert!(line.debit().is_zero() != line.credit().is_zero());
            prop_assert!(line.debit() >= Decimal::ZERO && line.credit() >= Decimal::ZERO);
        }
    }
}
