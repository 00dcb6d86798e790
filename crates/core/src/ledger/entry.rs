//! Journal line domain types.
//!
//! A [`Posting`] is a side plus a strictly positive amount, so a journal line
//! can never carry both a debit and a credit, nor a zero amount.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Type of journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Debit entry (increases assets/expenses, decreases liabilities/revenue).
    Debit,
    /// Credit entry (decreases assets/expenses, increases liabilities/revenue).
    Credit,
}

impl EntryType {
    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Debit => Self::Credit,
            Self::Credit => Self::Debit,
        }
    }
}

/// A side and a strictly positive amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    entry_type: EntryType,
    amount: Decimal,
}

impl Posting {
    /// Builds a posting from a signed business amount.
    ///
    /// A positive amount lands on `natural_side`, a negative one on the
    /// opposite side with its magnitude. Zero yields `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salesbook_core::ledger::{EntryType, Posting};
    ///
    /// let revenue = Posting::from_signed(dec!(-50), EntryType::Credit).unwrap();
    /// assert_eq!(revenue.entry_type(), EntryType::Debit);
    /// assert_eq!(revenue.amount(), dec!(50));
    /// assert!(Posting::from_signed(dec!(0), EntryType::Debit).is_none());
    /// ```
    #[must_use]
    pub fn from_signed(amount: Decimal, natural_side: EntryType) -> Option<Self> {
        if amount.is_zero() {
            return None;
        }
        let entry_type = if amount.is_sign_negative() {
            natural_side.opposite()
        } else {
            natural_side
        };
        Some(Self {
            entry_type,
            amount: amount.abs(),
        })
    }

    /// Debit posting of a positive amount; `None` unless `amount > 0`.
    #[must_use]
    pub fn debit(amount: Decimal) -> Option<Self> {
        (amount > Decimal::ZERO).then_some(Self {
            entry_type: EntryType::Debit,
            amount,
        })
    }

    /// Credit posting of a positive amount; `None` unless `amount > 0`.
    #[must_use]
    pub fn credit(amount: Decimal) -> Option<Self> {
        (amount > Decimal::ZERO).then_some(Self {
            entry_type: EntryType::Credit,
            amount,
        })
    }

    /// Same magnitude on the other side.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self {
            entry_type: self.entry_type.opposite(),
            amount: self.amount,
        }
    }

    /// The side of this posting.
    #[must_use]
    pub const fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// The (positive) amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.entry_type {
            EntryType::Debit => self.amount,
            EntryType::Credit => -self.amount,
        }
    }
}

/// Analytic tag of a journal line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnalyticTag {
    /// Line derived from one title.
    Item(String),
    /// Line computed over the whole extract.
    Global,
}

impl std::fmt::Display for AnalyticTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Item(identifier) => write!(f, "{identifier}"),
            Self::Global => write!(f, "GLOBAL"),
        }
    }
}

/// A single line of the sales journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalLine {
    /// Posting date.
    pub date: NaiveDate,
    /// Journal code.
    pub journal_code: String,
    /// Account code.
    pub account: String,
    /// Line label.
    pub label: String,
    /// Analytic family.
    pub analytic_family: String,
    /// Analytic tag (ISBN or global).
    pub analytic_tag: AnalyticTag,
    posting: Posting,
}

impl JournalLine {
    /// Creates a line carrying the given posting.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        journal_code: impl Into<String>,
        account: impl Into<String>,
        label: impl Into<String>,
        analytic_family: impl Into<String>,
        analytic_tag: AnalyticTag,
        posting: Posting,
    ) -> Self {
        Self {
            date,
            journal_code: journal_code.into(),
            account: account.into(),
            label: label.into(),
            analytic_family: analytic_family.into(),
            analytic_tag,
            posting,
        }
    }

    /// The posting of this line.
    #[must_use]
    pub const fn posting(&self) -> Posting {
        self.posting
    }

    /// Debit amount (zero for credit lines).
    #[must_use]
    pub fn debit(&self) -> Decimal {
        match self.posting.entry_type {
            EntryType::Debit => self.posting.amount,
            EntryType::Credit => Decimal::ZERO,
        }
    }

    /// Credit amount (zero for debit lines).
    #[must_use]
    pub fn credit(&self) -> Decimal {
        match self.posting.entry_type {
            EntryType::Debit => Decimal::ZERO,
            EntryType::Credit => self.posting.amount,
        }
    }
}
