//! Reversal date scheduling.

use chrono::{Datelike, Months, NaiveDate};

use super::error::LedgerError;
use super::types::ReversalPolicy;

/// Returns true if `date` is the last day of its month.
#[must_use]
pub fn is_month_end(date: NaiveDate) -> bool {
    date.succ_opt().is_none_or(|next| next.month() != date.month())
}

/// Rolls `date` forward by `months` month ends.
///
/// The current month's end counts as the first step unless `date` already is
/// a month end: 15 Jan + 6 gives 30 Jun, 31 Jan + 6 gives 31 Jul.
/// Returns `None` past the calendar range.
#[must_use]
pub fn month_end_after(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    let steps = if is_month_end(date) {
        months
    } else {
        months.saturating_sub(1)
    };

    let first_of_month = date.with_day(1)?;
    first_of_month
        .checked_add_months(Months::new(steps))?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

impl ReversalPolicy {
    /// The reversal date for a posting date, or `None` when disabled.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::ReversalDateOutOfRange` past the calendar range.
    pub fn reversal_date(&self, posting_date: NaiveDate) -> Result<Option<NaiveDate>, LedgerError> {
        match self {
            Self::Disabled => Ok(None),
            Self::MonthEndAfter(months) => month_end_after(posting_date, *months)
                .map(Some)
                .ok_or(LedgerError::ReversalDateOutOfRange(posting_date)),
        }
    }
}
