//! The finished, balanced journal.

use super::entry::JournalLine;
use super::types::JournalTotals;

/// An ordered, balanced set of journal lines.
///
/// Only the journal builder creates journals, and only after validation, so
/// every `Journal` in hand satisfies debits == credits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    lines: Vec<JournalLine>,
    totals: JournalTotals,
}

impl Journal {
    pub(crate) fn new(lines: Vec<JournalLine>, totals: JournalTotals) -> Self {
        Self { lines, totals }
    }

    /// The lines, in posting order.
    #[must_use]
    pub fn lines(&self) -> &[JournalLine] {
        &self.lines
    }

    /// Iterates over the lines.
    pub fn iter(&self) -> std::slice::Iter<'_, JournalLine> {
        self.lines.iter()
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the journal has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Debit and credit totals.
    #[must_use]
    pub const fn totals(&self) -> JournalTotals {
        self.totals
    }
}

impl<'a> IntoIterator for &'a Journal {
    type Item = &'a JournalLine;
    type IntoIter = std::slice::Iter<'a, JournalLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
