//! Salesbook command line
//!
//! Reads a distributor sales extract and writes the balanced sales journal.

mod args;
mod session;

use std::io;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use salesbook_core::ledger::{LedgerError, LedgerService, PostingParams};
use salesbook_core::session::Session as _;
use salesbook_io::{ImportOptions, JournalWriter, SalesImporter};
use salesbook_shared::{AppConfig, AppError};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::Cli;
use crate::session::LocalSession;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout may carry the journal
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salesbook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            error!(error = %format!("{err:#}"), "Journal generation failed");
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = AppConfig::load_with(cli.config.as_deref())?;

    let mut session = LocalSession::new(config.posting.operator.clone());
    let identity = session
        .authenticate(&session.operator_credentials())
        .map_err(|e| AppError::Forbidden(e.to_string()))?;
    info!(operator = %identity.display_name, "Session opened");

    let importer = SalesImporter::new(ImportOptions::from_config(&config.import)?);
    let import = importer
        .read_path(&cli.input)
        .map_err(|e| AppError::Input(e.to_string()))
        .with_context(|| format!("reading {}", cli.input.display()))?;

    let mut params = PostingParams::from_config(&config, cli.date);
    cli.apply(&mut params).map_err(|e| AppError::Validation(e.to_string()))?;

    let generated = LedgerService::generate(&session, &import.items, &params).map_err(ledger_error)?;

    let mut export = config.export.clone();
    if let Some(format) = cli.format {
        export.format = format.into();
    }
    let writer = JournalWriter::from_config(&export)?;

    match &cli.output {
        Some(path) => writer
            .write_path(&generated.journal, path)
            .map_err(|e| AppError::Output(e.to_string()))
            .with_context(|| format!("writing {}", path.display()))?,
        None => writer
            .write(&generated.journal, io::stdout().lock())
            .map_err(|e| AppError::Output(e.to_string()))?,
    }

    let totals = generated.journal.totals();
    info!(
        lines = generated.journal.len(),
        debit = %totals.debit,
        credit = %totals.credit,
        rows_dropped = import.report.rows_dropped,
        cells_coerced = import.report.cells_coerced,
        "Done"
    );

    Ok(())
}

fn ledger_error(err: LedgerError) -> AppError {
    match err {
        LedgerError::SessionInactive => AppError::Forbidden(err.to_string()),
        LedgerError::ReversalDateOutOfRange(_) => AppError::Validation(err.to_string()),
        other => AppError::BusinessRule(other.to_string()),
    }
}
