//! Business rule validation for generated journals.

use rust_decimal::Decimal;
use salesbook_shared::types::is_cent_exact;

use super::entry::JournalLine;
use super::error::LedgerError;
use super::types::JournalTotals;

/// Validates that journal lines are cent-exact and balanced.
///
/// An empty set of lines is balanced.
///
/// # Errors
///
/// Returns `SubCentAmount` for the first line with a sub-cent amount, or
/// `UnbalancedJournal` if total debits differ from total credits.
pub fn validate_lines(lines: &[JournalLine]) -> Result<JournalTotals, LedgerError> {
    let mut total_debits = Decimal::ZERO;
    let mut total_credits = Decimal::ZERO;

    for line in lines {
        let amount = line.posting().amount();
        if !is_cent_exact(amount) {
            return Err(LedgerError::SubCentAmount {
                account: line.account.clone(),
                amount,
            });
        }
        total_debits += line.debit();
        total_credits += line.credit();
    }

    let totals = JournalTotals::new(total_debits, total_credits);
    if !totals.is_balanced {
        return Err(LedgerError::UnbalancedJournal {
            debit: total_debits,
            credit: total_credits,
        });
    }

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::entry::{AnalyticTag, Posting};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn make_line(posting: Posting) -> JournalLine {
        JournalLine::new(
            NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
            "VT",
            "411100011",
            "test",
            "EDITION",
            AnalyticTag::Global,
            posting,
        )
    }

    #[test]
    fn test_balanced_lines() {
        let lines = vec![
            make_line(Posting::debit(dec!(100.00)).unwrap()),
            make_line(Posting::credit(dec!(60.00)).unwrap()),
            make_line(Posting::credit(dec!(40.00)).unwrap()),
        ];
        let totals = validate_lines(&lines).unwrap();
        assert!(totals.is_balanced);
        assert_eq!(totals.debit, dec!(100.00));
    }

    #[test]
    fn test_unbalanced_lines() {
        let lines = vec![
            make_line(Posting::debit(dec!(100.00)).unwrap()),
            make_line(Posting::credit(dec!(99.99)).unwrap()),
        ];
        let err = validate_lines(&lines).unwrap_err();
        assert_eq!(err.imbalance(), Some(dec!(0.01)));
    }

    #[test]
    fn test_sub_cent_amount_rejected() {
        let lines = vec![
            make_line(Posting::debit(dec!(0.005)).unwrap()),
            make_line(Posting::credit(dec!(0.005)).unwrap()),
        ];
        assert!(matches!(
            validate_lines(&lines),
            Err(LedgerError::SubCentAmount { .. })
        ));
    }

    #[test]
    fn test_empty_lines_are_balanced() {
        let totals = validate_lines(&[]).unwrap();
        assert!(totals.is_balanced);
        assert_eq!(totals.debit, Decimal::ZERO);
    }
}
