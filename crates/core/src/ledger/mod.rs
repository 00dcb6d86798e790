//! Double-entry journal generation.
//!
//! This module implements the core ledger functionality:
//! - Postings (debit or credit, strictly positive)
//! - Per-date balances and client counterparts
//! - Month-end reversal scheduling
//! - Business rule validation
//! - Domain types for journal generation
//! - Error types for ledger operations
//! - Ledger service assembling the journal

pub mod balance;
pub mod entry;
pub mod error;
pub mod journal;
pub mod schedule;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod service_props;

pub use balance::{DateBalance, balances_by_date};
pub use entry::{AnalyticTag, EntryType, JournalLine, Posting};
pub use error::LedgerError;
pub use journal::Journal;
pub use schedule::{is_month_end, month_end_after};
pub use service::{JournalBuilder, JournalRun, LedgerService, provision_amount};
pub use types::{AccountMap, JournalTotals, PostingParams, ReversalPolicy};
pub use validation::validate_lines;
