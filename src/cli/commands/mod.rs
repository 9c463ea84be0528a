//! Command implementations for the incident processor CLI
//!
//! This module contains the command execution logic, summary reporting and
//! error handling for the CLI interface. Each command is implemented in its
//! own module.

pub mod process;
pub mod report;
pub mod shared;

pub use shared::RunSummary;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner
///
/// Dispatches to the subcommand handler:
/// - `process`: raw table to enriched table and quality report
/// - `report`: quality report from an existing enriched table
pub async fn run(args: Args) -> Result<RunSummary> {
    match args.command {
        Some(Commands::Process(process_args)) => process::run_process(process_args).await,
        Some(Commands::Report(report_args)) => report::run_report(report_args).await,
        None => Err(Error::configuration("No command given")),
    }
}
