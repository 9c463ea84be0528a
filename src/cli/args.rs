//! Command-line argument definitions for the incident processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the emergency-dispatch incident processor
///
/// Cleans raw dispatch logs, decodes the free-text units and location fields,
/// derives calendar attributes and writes an enriched table plus a data
/// quality report.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "incident-processor",
    version,
    about = "Deduplicate and enrich emergency-dispatch incident logs",
    long_about = "Reads the raw incident table produced by the dispatch feed collector, removes \
                  duplicate incidents, decodes radio channels, unit lists and location notation, \
                  derives calendar and time-of-day attributes, and writes an enriched table \
                  together with a reproducible data quality report."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Enrich the raw incident table and write the quality report
    Process(ProcessArgs),
    /// Regenerate the quality report from an existing enriched table
    Report(ReportArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Raw incident table with Datetime, Event, Location and Units columns
    ///
    /// Defaults to incidents.csv in the working directory unless set in the
    /// config file or INCIDENT_INPUT_PATH.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Raw incident table to process"
    )]
    pub input_path: Option<PathBuf>,

    /// Enriched output table
    ///
    /// Replaced atomically when processing succeeds. Defaults to
    /// incidents_enhanced.csv.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Enriched table to write"
    )]
    pub output_path: Option<PathBuf>,

    /// Quality report artifact
    #[arg(
        short = 'r',
        long = "report",
        value_name = "PATH",
        help = "Quality report file to write"
    )]
    pub report_path: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config dir>/incident-processor/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Run enrichment without writing the table or the report
    #[arg(
        long = "dry-run",
        help = "Process incidents and print the summary without writing files"
    )]
    pub dry_run: bool,

    /// Skip quality report generation
    #[arg(long = "no-report", help = "Do not generate the quality report")]
    pub no_report: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the final run summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Enriched incident table to report on
    #[arg(
        short = 'i',
        long = "input",
        value_name = "ENRICHED",
        help = "Enriched table to read"
    )]
    pub input_path: Option<PathBuf>,

    /// Quality report artifact
    #[arg(
        short = 'r',
        long = "report",
        value_name = "PATH",
        help = "Quality report file to write"
    )]
    pub report_path: Option<PathBuf>,

    /// Print the report without writing the artifact
    #[arg(long = "stdout-only", help = "Print the report without saving it")]
    pub stdout_only: bool,

    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }
}

/// Map a verbosity count to a log level
fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Reject a config file path that does not exist
fn check_config_file(config_file: Option<&PathBuf>) -> Result<()> {
    if let Some(config_file) = config_file {
        if !config_file.exists() {
            return Err(Error::configuration(format!(
                "Config file does not exist: {}",
                config_file.display()
            )));
        }
    }
    Ok(())
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input_path.display()
                )));
            }

            if !input_path.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    input_path.display()
                )));
            }
        }

        if let (Some(input), Some(output)) = (&self.input_path, &self.output_path) {
            if input == output {
                return Err(Error::configuration(
                    "Output path must differ from the input path",
                ));
            }
        }

        if self.no_report && self.report_path.is_some() {
            return Err(Error::configuration(
                "--report cannot be combined with --no-report",
            ));
        }

        check_config_file(self.config_file.as_ref())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            level_for_verbosity(self.verbose)
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ReportArgs {
    /// Validate the report command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.is_file() {
                return Err(Error::configuration(format!(
                    "Enriched table does not exist: {}",
                    input_path.display()
                )));
            }
        }

        if self.stdout_only && self.report_path.is_some() {
            return Err(Error::configuration(
                "--report cannot be combined with --stdout-only",
            ));
        }

        check_config_file(self.config_file.as_ref())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        level_for_verbosity(self.verbose)
    }
}

impl Default for ProcessArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: None,
            report_path: None,
            config_file: None,
            dry_run: false,
            no_report: false,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            report_path: None,
            stdout_only: false,
            config_file: None,
            verbose: 0,
        }
    }
}
