//! Debit/credit balances per posting date and the counterparts that close them.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::entry::{EntryType, JournalLine, Posting};

/// Running debit and credit totals of one posting date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBalance {
    /// The posting date.
    pub date: NaiveDate,
    /// Total debit amount.
    pub debit_total: Decimal,
    /// Total credit amount.
    pub credit_total: Decimal,
}

impl DateBalance {
    /// Creates an empty balance for a date.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            debit_total: Decimal::ZERO,
            credit_total: Decimal::ZERO,
        }
    }

    /// Adds a line's posting.
    pub fn add(&mut self, posting: Posting) {
        match posting.entry_type() {
            EntryType::Debit => self.debit_total += posting.amount(),
            EntryType::Credit => self.credit_total += posting.amount(),
        }
    }

    /// Debits minus credits.
    #[must_use]
    pub fn imbalance(&self) -> Decimal {
        self.debit_total - self.credit_total
    }

    /// The posting that brings this date back to zero, if any.
    ///
    /// A debit surplus is closed by a credit and a credit surplus by a debit.
    #[must_use]
    pub fn counterpart(&self) -> Option<Posting> {
        Posting::from_signed(self.imbalance(), EntryType::Credit)
    }
}

/// Balances per posting date, in order of first appearance.
#[must_use]
pub fn balances_by_date(lines: &[JournalLine]) -> Vec<DateBalance> {
    let mut balances: Vec<DateBalance> = Vec::new();

    for line in lines {
        let pos = match balances.iter().position(|b| b.date == line.date) {
            Some(pos) => pos,
            None => {
                balances.push(DateBalance::new(line.date));
                balances.len() - 1
            }
        };
        balances[pos].add(line.posting());
    }

    balances
}
