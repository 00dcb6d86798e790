//! Application configuration management.
//!
//! Every field carries a default, so an empty configuration describes the
//! standard distributor extract and chart of accounts.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppError;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Account codes used by each journal bucket.
    #[serde(default)]
    pub accounts: AccountsConfig,
    /// Posting parameters (journal, label, VAT).
    #[serde(default)]
    pub posting: PostingConfig,
    /// Commission totals or rates.
    #[serde(default)]
    pub commissions: CommissionsConfig,
    /// Returns provision settings.
    #[serde(default)]
    pub provision: ProvisionConfig,
    /// Sales extract layout.
    #[serde(default)]
    pub import: ImportConfig,
    /// Journal export layout.
    #[serde(default)]
    pub export: ExportConfig,
}

/// Account codes per journal bucket.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccountsConfig {
    /// Gross revenue.
    pub revenue: String,
    /// Returns.
    pub returns: String,
    /// Trade discounts granted to booksellers.
    pub discount: String,
    /// Distribution commission expense.
    pub distribution_commission: String,
    /// Diffusion commission expense.
    pub diffusion_commission: String,
    /// VAT collected on sales.
    pub vat_collected: String,
    /// VAT deductible on commissions.
    pub vat_deductible: String,
    /// Returns provision expense.
    pub provision_expense: String,
    /// Returns provision reversal income.
    pub provision_reversal: String,
    /// Client counterpart.
    pub client: String,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            revenue: "701100000".to_string(),
            returns: "709000000".to_string(),
            discount: "709100000".to_string(),
            distribution_commission: "622800000".to_string(),
            diffusion_commission: "622800010".to_string(),
            vat_collected: "445710060".to_string(),
            vat_deductible: "445660000".to_string(),
            provision_expense: "681000000".to_string(),
            provision_reversal: "781000000".to_string(),
            client: "411100011".to_string(),
        }
    }
}

/// Posting parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PostingConfig {
    /// Journal code written on every line.
    pub journal_code: String,
    /// Free-text label prefix.
    pub label: String,
    /// Analytic family written on every line.
    pub analytic_family: String,
    /// VAT rate as a fraction (0.055 for 5.5 %).
    pub vat_rate: Decimal,
    /// Name of the local operator running the tool.
    pub operator: String,
}

impl Default for PostingConfig {
    fn default() -> Self {
        Self {
            journal_code: "VT".to_string(),
            label: "VENTES BLDD".to_string(),
            analytic_family: "EDITION".to_string(),
            vat_rate: Decimal::new(55, 3),
            operator: "local".to_string(),
        }
    }
}

/// Commission settings for both commission types.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CommissionsConfig {
    /// Distribution commission, allocated on gross sales.
    pub distribution: CommissionSetting,
    /// Diffusion commission, allocated on net-of-discount amounts.
    pub diffusion: CommissionSetting,
}

impl Default for CommissionsConfig {
    fn default() -> Self {
        Self {
            distribution: CommissionSetting::fixed(Decimal::new(100_000, 2)),
            diffusion: CommissionSetting::fixed(Decimal::new(50_000, 2)),
        }
    }
}

/// A commission given either as a fixed total or as a rate on its weights.
///
/// When both are set, the fixed total wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommissionSetting {
    /// Fixed total to allocate.
    #[serde(default)]
    pub total: Option<Decimal>,
    /// Rate applied to the sum of the weights.
    #[serde(default)]
    pub rate: Option<Decimal>,
}

impl CommissionSetting {
    /// Creates a fixed-total setting.
    #[must_use]
    pub const fn fixed(total: Decimal) -> Self {
        Self {
            total: Some(total),
            rate: None,
        }
    }

    /// Creates a rate setting.
    #[must_use]
    pub const fn rate(rate: Decimal) -> Self {
        Self {
            total: None,
            rate: Some(rate),
        }
    }
}

/// Returns provision settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProvisionConfig {
    /// Provision rate as a fraction of VAT-inclusive gross sales.
    pub rate: Decimal,
    /// Months until the mirrored reversal (month-end). `None` disables it.
    pub reversal_months: Option<u32>,
    /// Reversal of a provision booked in an earlier run.
    pub prior_reversal: Option<Decimal>,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            rate: Decimal::new(10, 2),
            reversal_months: Some(6),
            prior_reversal: None,
        }
    }
}

/// Sales extract layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Zero-based row index of the header row.
    pub header_row: usize,
    /// Field delimiter.
    pub delimiter: char,
    /// Identifier (ISBN) column.
    pub identifier_column: String,
    /// Gross sales column.
    pub gross_sales_column: String,
    /// Returns column.
    pub returns_column: String,
    /// Net-of-discount column.
    pub net_column: String,
    /// Invoiced amount column.
    pub invoiced_column: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            header_row: 9,
            delimiter: ';',
            identifier_column: "ISBN".to_string(),
            gross_sales_column: "Vente".to_string(),
            returns_column: "Retour".to_string(),
            net_column: "Net".to_string(),
            invoiced_column: "Facture".to_string(),
        }
    }
}

/// Journal export file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Delimited text, one row per journal line.
    #[default]
    Csv,
    /// JSON array, one object per journal line.
    Json,
}

/// Journal export layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File format.
    pub format: ExportFormat,
    /// Field delimiter for delimited output.
    pub delimiter: char,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            delimiter: ';',
        }
    }
}

/// Converts a configured delimiter into the single byte the csv layer expects.
///
/// # Errors
///
/// Returns an error if the delimiter is not an ASCII character.
pub fn delimiter_byte(delimiter: char) -> Result<u8, AppError> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| AppError::Config(format!("delimiter {delimiter:?} is not ASCII")))
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, AppError> {
        Self::load_with(None)
    }

    /// Loads configuration, layering an explicit file over the defaults.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// the explicit file, then `SALESBOOK__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load_with(explicit: Option<&str>) -> Result<Self, AppError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        let config = builder
            .add_source(config::Environment::with_prefix("SALESBOOK").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
