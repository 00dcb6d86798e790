//! Ledger error types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while generating a journal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The journal does not balance after the counterpart lines were added.
    ///
    /// This signals a defect upstream and must stop any automated import.
    #[error("Journal is not balanced. Debit: {debit}, Credit: {credit}")]
    UnbalancedJournal {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    /// A line amount carries a sub-cent part.
    #[error("Amount {amount} on account {account} is not a whole number of cents")]
    SubCentAmount {
        /// Account of the offending line.
        account: String,
        /// The offending amount.
        amount: Decimal,
    },

    /// The provision reversal date falls outside the calendar range.
    #[error("No reversal date can be computed from {0}")]
    ReversalDateOutOfRange(NaiveDate),

    /// The session gate refused to run.
    #[error("Session is not active")]
    SessionInactive,
}

impl LedgerError {
    /// Returns the stable error code used in logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnbalancedJournal { .. } => "UNBALANCED_JOURNAL",
            Self::SubCentAmount { .. } => "SUB_CENT_AMOUNT",
            Self::ReversalDateOutOfRange(_) => "REVERSAL_DATE_OUT_OF_RANGE",
            Self::SessionInactive => "SESSION_INACTIVE",
        }
    }

    /// Signed residual (debit minus credit) of an unbalanced journal.
    #[must_use]
    pub fn imbalance(&self) -> Option<Decimal> {
        match self {
            Self::UnbalancedJournal { debit, credit } => Some(*debit - *credit),
            _ => None,
        }
    }
}
