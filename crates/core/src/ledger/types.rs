//! Ledger domain types for journal generation.
//!
//! This module defines the parameters the journal builder consumes and the
//! totals it reports.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use salesbook_shared::AppConfig;
use salesbook_shared::config::AccountsConfig;

use crate::allocation::CommissionBasis;

/// Account code per journal bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountMap {
    /// Gross revenue.
    pub revenue: String,
    /// Returns.
    pub returns: String,
    /// Bookseller discounts.
    pub discount: String,
    /// Distribution commission expense.
    pub distribution_commission: String,
    /// Diffusion commission expense.
    pub diffusion_commission: String,
    /// VAT collected on sales.
    pub vat_collected: String,
    /// VAT deductible on commissions.
    pub vat_deductible: String,
    /// Returns provision expense.
    pub provision_expense: String,
    /// Returns provision reversal income.
    pub provision_reversal: String,
    /// Client counterpart, receives the balancing lines.
    pub client: String,
}

impl From<&AccountsConfig> for AccountMap {
    fn from(accounts: &AccountsConfig) -> Self {
        Self {
            revenue: accounts.revenue.clone(),
            returns: accounts.returns.clone(),
            discount: accounts.discount.clone(),
            distribution_commission: accounts.distribution_commission.clone(),
            diffusion_commission: accounts.diffusion_commission.clone(),
            vat_collected: accounts.vat_collected.clone(),
            vat_deductible: accounts.vat_deductible.clone(),
            provision_expense: accounts.provision_expense.clone(),
            provision_reversal: accounts.provision_reversal.clone(),
            client: accounts.client.clone(),
        }
    }
}

impl Default for AccountMap {
    fn default() -> Self {
        Self::from(&AccountsConfig::default())
    }
}

/// When the returns provision is mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReversalPolicy {
    /// No mirrored reversal.
    #[default]
    Disabled,
    /// Mirror at the month end reached after this many months.
    MonthEndAfter(u32),
}

impl From<Option<u32>> for ReversalPolicy {
    fn from(months: Option<u32>) -> Self {
        months.map_or(Self::Disabled, Self::MonthEndAfter)
    }
}

/// Everything the journal builder needs besides the line items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingParams {
    /// Posting date of every non-reversal line.
    pub posting_date: NaiveDate,
    /// Journal code.
    pub journal_code: String,
    /// Label prefix.
    pub label: String,
    /// Analytic family.
    pub analytic_family: String,
    /// VAT rate as a fraction.
    pub vat_rate: Decimal,
    /// Provision rate as a fraction of VAT-inclusive gross sales.
    pub provision_rate: Decimal,
    /// Provision reversal policy.
    pub reversal: ReversalPolicy,
    /// Reversal of a provision booked in an earlier run.
    pub prior_provision_reversal: Option<Decimal>,
    /// Distribution commission basis.
    pub distribution: CommissionBasis,
    /// Diffusion commission basis.
    pub diffusion: CommissionBasis,
    /// Account codes.
    pub accounts: AccountMap,
}

impl PostingParams {
    /// Builds parameters from the application configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig, posting_date: NaiveDate) -> Self {
        Self {
            posting_date,
            journal_code: config.posting.journal_code.clone(),
            label: config.posting.label.clone(),
            analytic_family: config.posting.analytic_family.clone(),
            vat_rate: config.posting.vat_rate,
            provision_rate: config.provision.rate,
            reversal: ReversalPolicy::from(config.provision.reversal_months),
            prior_provision_reversal: config.provision.prior_reversal,
            distribution: CommissionBasis::from(&config.commissions.distribution),
            diffusion: CommissionBasis::from(&config.commissions.diffusion),
            accounts: AccountMap::from(&config.accounts),
        }
    }
}

/// Journal totals for validation and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalTotals {
    /// Total debit amount.
    pub debit: Decimal,
    /// Total credit amount.
    pub credit: Decimal,
    /// Whether the journal is balanced (debits == credits).
    pub is_balanced: bool,
}

impl JournalTotals {
    /// Creates new totals from debit and credit sums.
    #[must_use]
    pub fn new(debit: Decimal, credit: Decimal) -> Self {
        Self {
            debit,
            credit,
            is_balanced: debit == credit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_journal_totals_balanced() {
        let totals = JournalTotals::new(Decimal::new(10000, 2), Decimal::new(10000, 2));
        assert!(totals.is_balanced);
        assert_eq!(totals.debit, totals.credit);
    }

    #[test]
    fn test_journal_totals_unbalanced() {
        let totals = JournalTotals::new(Decimal::new(5000, 2), Decimal::new(10000, 2));
        assert!(!totals.is_balanced);
    }

    #[test]
    fn test_reversal_policy_from_months() {
        assert_eq!(ReversalPolicy::from(None), ReversalPolicy::Disabled);
        assert_eq!(ReversalPolicy::from(Some(6)), ReversalPolicy::MonthEndAfter(6));
    }

    #[test]
    fn test_params_from_default_config() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
        let params = PostingParams::from_config(&AppConfig::default(), date);
        assert_eq!(params.posting_date, date);
        assert_eq!(params.journal_code, "VT");
        assert_eq!(params.vat_rate, dec!(0.055));
        assert_eq!(params.provision_rate, dec!(0.10));
        assert_eq!(params.reversal, ReversalPolicy::MonthEndAfter(6));
        assert_eq!(params.distribution, CommissionBasis::FixedTotal(dec!(1000.00)));
        assert_eq!(params.diffusion, CommissionBasis::FixedTotal(dec!(500.00)));
        assert_eq!(params.accounts, AccountMap::default());
        assert_eq!(params.accounts.client, "411100011");
    }
}
