//! Sales extract reader.
//!
//! The distributor extract is a delimited file with a few lines of preamble
//! before the header row. Rows are read leniently: unparsable amounts become
//! zero, rows without identifier are dropped, and duplicate identifiers are
//! summed. Every leniency is counted in the [`ImportReport`].

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use rust_decimal::Decimal;
use salesbook_core::sales::{LineItem, aggregate_by_identifier};
use salesbook_shared::AppError;
use salesbook_shared::config::{ImportConfig, delimiter_byte};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ImportError;
use crate::identifier::canonical_identifier;
use crate::numeric::parse_amount;

/// Header names of the required columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    /// Identifier (ISBN) column.
    pub identifier: String,
    /// Gross sales column.
    pub gross_sales: String,
    /// Returns column.
    pub returns: String,
    /// Net-of-discount column.
    pub net_of_discount: String,
    /// Invoiced amount column.
    pub invoiced: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self::from(&ImportConfig::default())
    }
}

impl From<&ImportConfig> for ColumnNames {
    fn from(config: &ImportConfig) -> Self {
        Self {
            identifier: config.identifier_column.clone(),
            gross_sales: config.gross_sales_column.clone(),
            returns: config.returns_column.clone(),
            net_of_discount: config.net_column.clone(),
            invoiced: config.invoiced_column.clone(),
        }
    }
}

/// Layout of the extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    /// Zero-based index of the header row.
    pub header_row: usize,
    /// Field delimiter.
    pub delimiter: u8,
    /// Required column names.
    pub columns: ColumnNames,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            header_row: 9,
            delimiter: b';',
            columns: ColumnNames::default(),
        }
    }
}

impl ImportOptions {
    /// Builds options from the `import` configuration section.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the delimiter is not ASCII.
    pub fn from_config(config: &ImportConfig) -> Result<Self, AppError> {
        Ok(Self {
            header_row: config.header_row,
            delimiter: delimiter_byte(config.delimiter)?,
            columns: ColumnNames::from(config),
        })
    }
}

/// What the importer had to forgive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Data rows after the header.
    pub rows_read: usize,
    /// Rows dropped for lack of identifier.
    pub rows_dropped: usize,
    /// Non-empty amount cells that did not parse and were set to zero.
    pub cells_coerced: usize,
    /// Rows folded into an earlier row with the same identifier.
    pub duplicates_merged: usize,
}

/// Line items read from an extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesImport {
    /// One item per identifier, in order of first appearance.
    pub items: Vec<LineItem>,
    /// Import statistics.
    pub report: ImportReport,
}

/// Column positions resolved from the header row.
struct ColumnPositions {
    identifier: usize,
    gross_sales: usize,
    returns: usize,
    net_of_discount: usize,
    invoiced: usize,
}

impl ColumnPositions {
    fn locate(header: &ByteRecord, columns: &ColumnNames) -> Result<Self, ImportError> {
        let names: Vec<String> = header
            .iter()
            .map(|cell| {
                String::from_utf8_lossy(cell)
                    .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
                    .to_string()
            })
            .collect();

        let find = |wanted: &str| {
            names
                .iter()
                .position(|name| name == wanted)
                .ok_or_else(|| ImportError::MissingColumn(wanted.to_string()))
        };

        Ok(Self {
            identifier: find(&columns.identifier)?,
            gross_sales: find(&columns.gross_sales)?,
            returns: find(&columns.returns)?,
            net_of_discount: find(&columns.net_of_discount)?,
            invoiced: find(&columns.invoiced)?,
        })
    }
}

/// Reads sales extracts into line items.
#[derive(Debug, Clone, Default)]
pub struct SalesImporter {
    options: ImportOptions,
}

impl SalesImporter {
    /// Creates an importer with the given layout.
    #[must_use]
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    /// Reads an extract file.
    ///
    /// # Errors
    ///
    /// Returns `ImportError` if the file cannot be opened or read.
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<SalesImport, ImportError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Opening sales extract");
        self.read(File::open(path)?)
    }

    /// Reads an extract from any reader.
    ///
    /// # Errors
    ///
    /// Returns `ImportError` if the text is malformed, the header row is
    /// missing, or a required column is absent.
    pub fn read<R: Read>(&self, input: R) -> Result<SalesImport, ImportError> {
        let header_row = self.options.header_row;
        let mut input = BufReader::new(input);

        // The header offset counts physical lines, blank ones included; the
        // csv reader would skip those.
        let mut line = Vec::new();
        for _ in 0..header_row {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                return Err(ImportError::MissingHeader { row: header_row });
            }
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.options.delimiter)
            .from_reader(input);
        let mut records = reader.byte_records();
        let header = records
            .next()
            .ok_or(ImportError::MissingHeader { row: header_row })??;
        let positions = ColumnPositions::locate(&header, &self.options.columns)?;

        let mut report = ImportReport::default();
        let mut rows = Vec::new();

        for record in records {
            let record = record?;
            report.rows_read += 1;
            let row = header_row + report.rows_read;

            let Some(identifier) = record
                .get(positions.identifier)
                .and_then(|cell| canonical_identifier(&String::from_utf8_lossy(cell)))
            else {
                report.rows_dropped += 1;
                debug!(row, "Row without identifier dropped");
                continue;
            };

            let mut amount = |position: usize, column: &str| {
                let cell = record
                    .get(position)
                    .map(String::from_utf8_lossy)
                    .unwrap_or_default();
                parse_amount(&cell).unwrap_or_else(|| {
                    report.cells_coerced += 1;
                    warn!(row, column, value = %cell, "Unparsable amount coerced to zero");
                    Decimal::ZERO
                })
            };

            let columns = &self.options.columns;
            let gross_sales = amount(positions.gross_sales, &columns.gross_sales);
            let returns = amount(positions.returns, &columns.returns);
            let net_of_discount = amount(positions.net_of_discount, &columns.net_of_discount);
            let invoiced = amount(positions.invoiced, &columns.invoiced);

            rows.push(LineItem::new(
                identifier,
                gross_sales,
                returns,
                net_of_discount,
                invoiced,
            ));
        }

        let kept = rows.len();
        let items = aggregate_by_identifier(rows);
        report.duplicates_merged = kept - items.len();

        info!(
            rows_read = report.rows_read,
            rows_dropped = report.rows_dropped,
            cells_coerced = report.cells_coerced,
            duplicates_merged = report.duplicates_merged,
            items = items.len(),
            "Sales extract imported"
        );

        Ok(SalesImport { items, report })
    }
}
