//! File boundary for Salesbook.
//!
//! Reads the distributor's sales extract into line items and writes the
//! finished journal out. All parsing leniency lives here so the core only
//! ever sees clean, cent-exact amounts.
//!
//! # Modules
//!
//! - `identifier` - Canonical ISBN form
//! - `numeric` - Lenient amount parsing
//! - `import` - Sales extract reader
//! - `export` - Journal writer (CSV or JSON)

pub mod error;
pub mod export;
pub mod identifier;
pub mod import;
pub mod numeric;

pub use error::{ExportError, ImportError};
pub use export::{EXPORT_HEADER, JournalWriter};
pub use identifier::canonical_identifier;
pub use import::{ColumnNames, ImportOptions, ImportReport, SalesImport, SalesImporter};
pub use numeric::parse_amount;
