//! Command line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use salesbook_core::allocation::{AllocationError, CommissionBasis};
use salesbook_core::ledger::{PostingParams, ReversalPolicy};
use salesbook_shared::config::ExportFormat;

/// Journal file format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Delimited text.
    Csv,
    /// JSON array.
    Json,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => Self::Csv,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Build the sales journal from a distributor extract.
#[derive(Parser, Debug)]
#[command(name = "salesbook", version, about)]
pub struct Cli {
    /// Sales extract (delimited text).
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Journal file (stdout if omitted).
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Configuration file layered over config/default.
    #[arg(short = 'c', long)]
    pub config: Option<String>,

    /// Posting date, YYYY-MM-DD.
    #[arg(short = 'd', long)]
    pub date: NaiveDate,

    /// Distribution commission total to allocate.
    #[arg(long, conflicts_with = "distribution_rate")]
    pub distribution_total: Option<f64>,

    /// Distribution commission as a rate on gross sales.
    #[arg(long)]
    pub distribution_rate: Option<Decimal>,

    /// Diffusion commission total to allocate.
    #[arg(long, conflicts_with = "diffusion_rate")]
    pub diffusion_total: Option<f64>,

    /// Diffusion commission as a rate on net-of-discount amounts.
    #[arg(long)]
    pub diffusion_rate: Option<Decimal>,

    /// Reversal of a provision booked in an earlier run.
    #[arg(long)]
    pub prior_reversal: Option<Decimal>,

    /// Months until the provision is mirrored at month end.
    #[arg(long, conflicts_with = "no_reversal")]
    pub reversal_months: Option<u32>,

    /// Do not mirror the provision.
    #[arg(long)]
    pub no_reversal: bool,

    /// Journal file format.
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Applies flag overrides on top of configured parameters.
    ///
    /// # Errors
    ///
    /// Returns an `AllocationError` if a commission total is not a finite
    /// decimal amount.
    pub fn apply(&self, params: &mut PostingParams) -> Result<(), AllocationError> {
        if let Some(total) = self.distribution_total {
            params.distribution = CommissionBasis::from_float_total(total)?;
        } else if let Some(rate) = self.distribution_rate {
            params.distribution = CommissionBasis::Rate(rate);
        }

        if let Some(total) = self.diffusion_total {
            params.diffusion = CommissionBasis::from_float_total(total)?;
        } else if let Some(rate) = self.diffusion_rate {
            params.diffusion = CommissionBasis::Rate(rate);
        }

        if let Some(prior) = self.prior_reversal {
            params.prior_provision_reversal = Some(prior);
        }

        if self.no_reversal {
            params.reversal = ReversalPolicy::Disabled;
        } else if let Some(months) = self.reversal_months {
            params.reversal = ReversalPolicy::MonthEndAfter(months);
        }

        Ok(())
    }
}
