//! Error types for the file boundary.

use thiserror::Error;

/// Errors while reading a sales extract.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited text is malformed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The file ends before the header row.
    #[error("Header row {row} not found: file has fewer rows")]
    MissingHeader {
        /// Zero-based header row index that was expected.
        row: usize,
    },

    /// A required column is absent from the header row.
    #[error("Required column '{0}' not found in header")]
    MissingColumn(String),
}

impl ImportError {
    /// Returns the error code for logs and exit reporting.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IMPORT_IO",
            Self::Csv(_) => "IMPORT_MALFORMED",
            Self::MissingHeader { .. } => "IMPORT_MISSING_HEADER",
            Self::MissingColumn(_) => "IMPORT_MISSING_COLUMN",
        }
    }
}

/// Errors while writing a journal.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    /// Returns the error code for logs and exit reporting.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "EXPORT_IO",
            Self::Csv(_) => "EXPORT_CSV",
            Self::Json(_) => "EXPORT_JSON",
        }
    }
}
