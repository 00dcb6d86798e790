//! Ledger service for journal generation.
//!
//! Turns sales line items and their commission allocations into a balanced
//! journal. Every line amount comes from business data except the client
//! counterparts, which exist only to make debits equal credits.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use salesbook_shared::types::round_cents;
use tracing::{debug, info};

use super::balance::balances_by_date;
use super::entry::{AnalyticTag, EntryType, JournalLine, Posting};
use super::error::LedgerError;
use super::journal::Journal;
use super::types::PostingParams;
use super::validation::validate_lines;
use crate::allocation::{AllocationResult, CommissionKind};
use crate::sales::LineItem;
use crate::session::{Session, require_active};

const GROSS_REVENUE: &str = "CA brut";
const RETURNS: &str = "Retours";
const DISCOUNT: &str = "Remises libraires";
const DISTRIBUTION_COMMISSION: &str = "Com. distribution";
const DIFFUSION_COMMISSION: &str = "Com. diffusion";
const PROVISION: &str = "Provision retours";
const PROVISION_REVERSAL: &str = "Reprise provision";
const PRIOR_PROVISION_REVERSAL: &str = "Reprise provision antérieure";
const VAT_COLLECTED: &str = "TVA collectée";
const VAT_DEDUCTIBLE: &str = "TVA déductible commissions";
const COUNTERPART: &str = "Contrepartie client";
const COUNTERPART_REVERSAL: &str = "Contrepartie client (reprise)";

/// A generated journal with the commission allocations behind it.
#[derive(Debug, Clone)]
pub struct JournalRun {
    /// The balanced journal.
    pub journal: Journal,
    /// Distribution commission per line item.
    pub distribution: AllocationResult,
    /// Diffusion commission per line item.
    pub diffusion: AllocationResult,
}

/// Ledger service for journal generation.
///
/// This service contains pure business logic with no file or CLI
/// dependencies. Each call is a pure function of its inputs.
pub struct LedgerService;

impl LedgerService {
    /// Generate the sales journal for a set of line items.
    ///
    /// Steps:
    /// 1. Checks the session gate
    /// 2. Allocates both commissions (clamped weights, largest remainder)
    /// 3. Builds per-item and global lines, then the client counterparts
    /// 4. Validates that debits equal credits
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if the session is inactive, the reversal date is
    /// out of range, or the journal fails validation.
    pub fn generate(
        session: &dyn Session,
        items: &[LineItem],
        params: &PostingParams,
    ) -> Result<JournalRun, LedgerError> {
        require_active(session)?;

        let distribution = params
            .distribution
            .allocate(CommissionKind::Distribution, items);
        let diffusion = params.diffusion.allocate(CommissionKind::Diffusion, items);

        let journal = JournalBuilder::new(params).build(items, &distribution, &diffusion)?;

        let totals = journal.totals();
        info!(
            items = items.len(),
            lines = journal.len(),
            debit = %totals.debit,
            credit = %totals.credit,
            distribution = %distribution.total(),
            diffusion = %diffusion.total(),
            "Journal generated"
        );

        Ok(JournalRun {
            journal,
            distribution,
            diffusion,
        })
    }
}

/// Write-once journal assembly.
pub struct JournalBuilder<'a> {
    params: &'a PostingParams,
    lines: Vec<JournalLine>,
}

impl<'a> JournalBuilder<'a> {
    /// Creates a builder for the given parameters.
    #[must_use]
    pub fn new(params: &'a PostingParams) -> Self {
        Self {
            params,
            lines: Vec::new(),
        }
    }

    /// Builds the journal from items and their per-item commissions.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if the reversal date is out of range or the
    /// finished journal does not validate.
    ///
    /// # Panics
    ///
    /// Panics if an allocation does not hold exactly one amount per item.
    pub fn build(
        mut self,
        items: &[LineItem],
        distribution: &AllocationResult,
        diffusion: &AllocationResult,
    ) -> Result<Journal, LedgerError> {
        assert_eq!(
            distribution.len(),
            items.len(),
            "distribution allocation must hold one amount per line item"
        );
        assert_eq!(
            diffusion.len(),
            items.len(),
            "diffusion allocation must hold one amount per line item"
        );

        let reversal_date = self.params.reversal.reversal_date(self.params.posting_date)?;

        for ((item, dist), diff) in items
            .iter()
            .zip(distribution.amounts())
            .zip(diffusion.amounts())
        {
            self.post_item(item, *dist, *diff, reversal_date);
        }

        let invoiced: Decimal = items.iter().map(LineItem::invoiced).sum();
        self.post_global(invoiced, distribution.total() + diffusion.total());
        self.post_counterparts();

        let totals = validate_lines(&self.lines)?;
        debug!(lines = self.lines.len(), debit = %totals.debit, "Journal balanced");

        Ok(Journal::new(self.lines, totals))
    }

    fn post_item(
        &mut self,
        item: &LineItem,
        distribution: Decimal,
        diffusion: Decimal,
        reversal_date: Option<NaiveDate>,
    ) {
        let params = self.params;
        let accounts = &params.accounts;
        let date = params.posting_date;
        let tag = AnalyticTag::Item(item.identifier().to_string());

        self.push(
            date,
            &accounts.revenue,
            GROSS_REVENUE,
            &tag,
            Posting::from_signed(item.gross_sales(), EntryType::Credit),
        );
        self.push(
            date,
            &accounts.returns,
            RETURNS,
            &tag,
            Posting::debit(item.returns()),
        );
        self.push(
            date,
            &accounts.discount,
            DISCOUNT,
            &tag,
            Posting::from_signed(item.discount(), EntryType::Debit),
        );
        self.push(
            date,
            &accounts.distribution_commission,
            DISTRIBUTION_COMMISSION,
            &tag,
            Posting::from_signed(distribution, EntryType::Debit),
        );
        self.push(
            date,
            &accounts.diffusion_commission,
            DIFFUSION_COMMISSION,
            &tag,
            Posting::from_signed(diffusion, EntryType::Debit),
        );

        let provision = Posting::from_signed(
            provision_amount(item.gross_sales(), params.vat_rate, params.provision_rate),
            EntryType::Debit,
        );
        self.push(date, &accounts.provision_expense, PROVISION, &tag, provision);

        if let (Some(reversal_date), Some(provision)) = (reversal_date, provision) {
            self.push(
                reversal_date,
                &accounts.provision_reversal,
                PROVISION_REVERSAL,
                &tag,
                Some(provision.mirrored()),
            );
        }
    }

    fn post_global(&mut self, invoiced: Decimal, commissions: Decimal) {
        let params = self.params;
        let accounts = &params.accounts;
        let date = params.posting_date;

        self.push(
            date,
            &accounts.vat_collected,
            VAT_COLLECTED,
            &AnalyticTag::Global,
            Posting::from_signed(round_cents(invoiced * params.vat_rate), EntryType::Credit),
        );
        self.push(
            date,
            &accounts.vat_deductible,
            VAT_DEDUCTIBLE,
            &AnalyticTag::Global,
            Posting::from_signed(round_cents(commissions * params.vat_rate), EntryType::Debit),
        );

        if let Some(prior) = params.prior_provision_reversal {
            self.push(
                date,
                &accounts.provision_reversal,
                PRIOR_PROVISION_REVERSAL,
                &AnalyticTag::Global,
                Posting::from_signed(round_cents(prior), EntryType::Credit),
            );
        }
    }

    /// One client counterpart per posting date whose lines do not balance.
    fn post_counterparts(&mut self) {
        let params = self.params;

        for balance in balances_by_date(&self.lines) {
            let suffix = if balance.date == params.posting_date {
                COUNTERPART
            } else {
                COUNTERPART_REVERSAL
            };
            self.push(
                balance.date,
                &params.accounts.client,
                suffix,
                &AnalyticTag::Global,
                balance.counterpart(),
            );
        }
    }

    fn push(
        &mut self,
        date: NaiveDate,
        account: &str,
        suffix: &str,
        tag: &AnalyticTag,
        posting: Option<Posting>,
    ) {
        let Some(posting) = posting else {
            return;
        };
        let params = self.params;
        self.lines.push(JournalLine::new(
            date,
            params.journal_code.as_str(),
            account,
            format!("{} - {suffix}", params.label),
            params.analytic_family.as_str(),
            tag.clone(),
            posting,
        ));
    }
}

/// Returns provision: VAT-inclusive gross sales times the provision rate.
#[must_use]
pub fn provision_amount(gross_sales: Decimal, vat_rate: Decimal, provision_rate: Decimal) -> Decimal {
    round_cents(gross_sales * (Decimal::ONE + vat_rate) * provision_rate)
}
