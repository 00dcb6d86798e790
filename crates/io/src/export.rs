//! Journal writer.
//!
//! One output row per journal line, with the columns the accounting import
//! expects. Output depends only on the journal, so the same journal always
//! produces the same bytes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rust_decimal::Decimal;
use salesbook_core::ledger::{Journal, JournalLine};
use salesbook_shared::AppError;
use salesbook_shared::config::{ExportConfig, ExportFormat, delimiter_byte};
use salesbook_shared::types::format_cents;
use serde::Serialize;
use tracing::info;

use crate::error::ExportError;

/// Column headers, in output order.
pub const EXPORT_HEADER: [&str; 8] = [
    "Date",
    "Journal",
    "Compte",
    "Libelle",
    "Famille analytique",
    "Analytique",
    "Debit",
    "Credit",
];

const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Journal")]
    journal: &'a str,
    #[serde(rename = "Compte")]
    account: &'a str,
    #[serde(rename = "Libelle")]
    label: &'a str,
    #[serde(rename = "Famille analytique")]
    analytic_family: &'a str,
    #[serde(rename = "Analytique")]
    analytic: String,
    #[serde(rename = "Debit")]
    debit: String,
    #[serde(rename = "Credit")]
    credit: String,
}

impl<'a> From<&'a JournalLine> for ExportRow<'a> {
    fn from(line: &'a JournalLine) -> Self {
        Self {
            date: line.date.format(DATE_FORMAT).to_string(),
            journal: &line.journal_code,
            account: &line.account,
            label: &line.label,
            analytic_family: &line.analytic_family,
            analytic: line.analytic_tag.to_string(),
            debit: amount_cell(line.debit()),
            credit: amount_cell(line.credit()),
        }
    }
}

/// Two-decimal amount, or an empty cell for the unused side.
fn amount_cell(amount: Decimal) -> String {
    if amount.is_zero() {
        String::new()
    } else {
        format_cents(amount)
    }
}

/// Writes journals as CSV or JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalWriter {
    format: ExportFormat,
    delimiter: u8,
}

impl Default for JournalWriter {
    fn default() -> Self {
        Self::new(ExportFormat::Csv, b';')
    }
}

impl JournalWriter {
    /// Creates a writer.
    #[must_use]
    pub const fn new(format: ExportFormat, delimiter: u8) -> Self {
        Self { format, delimiter }
    }

    /// Builds a writer from the `export` configuration section.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the delimiter is not ASCII.
    pub fn from_config(config: &ExportConfig) -> Result<Self, AppError> {
        Ok(Self::new(config.format, delimiter_byte(config.delimiter)?))
    }

    /// Output format.
    #[must_use]
    pub const fn format(&self) -> ExportFormat {
        self.format
    }

    /// Writes the journal to any writer.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if serialization or the underlying write fails.
    pub fn write<W: Write>(&self, journal: &Journal, mut out: W) -> Result<(), ExportError> {
        let rows: Vec<ExportRow<'_>> = journal.iter().map(ExportRow::from).collect();

        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::WriterBuilder::new()
                    .has_headers(false)
                    .delimiter(self.delimiter)
                    .from_writer(&mut out);
                writer.write_record(EXPORT_HEADER)?;
                for row in &rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                serde_json::to_writer_pretty(&mut out, &rows)?;
                out.write_all(b"\n")?;
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Renders the journal into memory.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if serialization fails.
    pub fn to_bytes(&self, journal: &Journal) -> Result<Vec<u8>, ExportError> {
        let mut buffer = Vec::new();
        self.write(journal, &mut buffer)?;
        Ok(buffer)
    }

    /// Writes the journal to a file, replacing it.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the file cannot be created or written.
    pub fn write_path(&self, journal: &Journal, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        self.write(journal, BufWriter::new(File::create(path)?))?;
        info!(path = %path.display(), lines = journal.len(), "Journal written");
        Ok(())
    }
}
