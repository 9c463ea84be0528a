//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! the command implementations.

use crate::cli::args::{OutputFormat, ProcessArgs, ReportArgs};
use crate::config::Config;
use crate::{Error, Result};
use colored::Colorize;
use indicatif::HumanDuration;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Outcome of a command run, printed as the final summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Rows read from the input table
    pub records_read: usize,
    /// Rows dropped as duplicates
    pub duplicates_removed: usize,
    /// Rows skipped for unparseable timestamps
    pub invalid_timestamps: usize,
    /// Rows written to the enriched table
    pub records_written: usize,
    /// Enriched table, when written
    pub output_path: Option<PathBuf>,
    /// Quality report artifact, when written
    pub report_path: Option<PathBuf>,
    /// True when nothing was written
    pub dry_run: bool,
    /// Wall-clock time of the run
    pub processing_time: Duration,
}

impl RunSummary {
    /// Files written during the run
    pub fn written_paths(&self) -> Vec<&Path> {
        self.output_path
            .iter()
            .chain(self.report_path.iter())
            .map(PathBuf::as_path)
            .collect()
    }
}

/// Set up structured logging
///
/// `RUST_LOG` takes precedence over `log_level`. Compact output is used in
/// quiet mode. Repeated initialisation is ignored.
pub fn setup_logging(log_level: &str, compact: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("incident_processor={}", log_level)));

    let initialised = if compact {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialised.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> env)
///
/// An explicit `config_file` must exist; otherwise the per-user config file
/// is used when present.
pub fn load_configuration(config_file: Option<&Path>) -> Result<Config> {
    info!("Loading configuration");

    let default_config_path = if config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = config_file.or_else(|| {
        default_config_path
            .as_deref()
            .filter(|path| path.exists())
    });

    match config_file {
        Some(config_path) => info!("Using config file: {}", config_path.display()),
        None => info!("No config file found, using defaults and environment variables"),
    }

    Config::load_layered(config_file)
}

/// Apply process command overrides to configuration
pub fn apply_process_overrides(config: &mut Config, args: &ProcessArgs) {
    if let Some(input_path) = &args.input_path {
        config.processing.input_path = input_path.clone();
    }
    if let Some(output_path) = &args.output_path {
        config.processing.output_path = output_path.clone();
    }
    if let Some(report_path) = &args.report_path {
        config.processing.report_path = report_path.clone();
    }

    if args.dry_run {
        config.processing.dry_run = true;
    }
    if args.no_report {
        config.processing.write_report = false;
    }
    config.processing.show_progress = config.processing.show_progress && args.show_progress();

    if args.verbose > 0 || args.quiet {
        config.logging.level = args.get_log_level().to_string();
    }
    if args.quiet {
        config.logging.structured = false;
    }
}

/// Apply report command overrides to configuration
///
/// The report reads the enriched table, so `--input` replaces the configured
/// output path.
pub fn apply_report_overrides(config: &mut Config, args: &ReportArgs) {
    if let Some(input_path) = &args.input_path {
        config.processing.output_path = input_path.clone();
    }
    if let Some(report_path) = &args.report_path {
        config.processing.report_path = report_path.clone();
    }
    if args.verbose > 0 {
        config.logging.level = args.get_log_level().to_string();
    }
}

/// Render the run summary in the requested format
pub fn render_summary(summary: &RunSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(render_human_summary(summary)),
        OutputFormat::Json => render_json_summary(summary),
        OutputFormat::Csv => Ok(render_csv_summary(summary)),
    }
}

fn render_human_summary(summary: &RunSummary) -> String {
    let mut lines = Vec::new();

    if summary.dry_run {
        lines.push(format!("\n{}", "Dry run complete (no files written)".yellow().bold()));
    } else {
        lines.push(format!("\n{}", "Incident processing complete!".green().bold()));
    }
    lines.push("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".to_string());
    lines.push("Processing Summary:".bold().to_string());
    lines.push(format!("   • Records read: {}", summary.records_read));
    lines.push(format!("   • Duplicates removed: {}", summary.duplicates_removed));
    if summary.invalid_timestamps > 0 {
        lines.push(format!(
            "   • Invalid timestamps: {}",
            summary.invalid_timestamps.to_string().yellow()
        ));
    } else {
        lines.push("   • Invalid timestamps: 0".to_string());
    }
    lines.push(format!("   • Records written: {}", summary.records_written));
    lines.push(format!(
        "   • Processing time: {}",
        HumanDuration(summary.processing_time)
    ));

    let written = summary.written_paths();
    if !written.is_empty() {
        lines.push(format!("\n{}", "Output Files:".bold()));
        for path in written {
            lines.push(format!("   {} {}", "✓".green(), path.display()));
        }
    }

    lines.join("\n")
}

fn render_json_summary(summary: &RunSummary) -> Result<String> {
    let json_summary = serde_json::json!({
        "records_read": summary.records_read,
        "duplicates_removed": summary.duplicates_removed,
        "invalid_timestamps": summary.invalid_timestamps,
        "records_written": summary.records_written,
        "dry_run": summary.dry_run,
        "processing_time_seconds": summary.processing_time.as_secs_f64(),
        "output_path": summary.output_path.as_ref().map(|p| p.display().to_string()),
        "report_path": summary.report_path.as_ref().map(|p| p.display().to_string()),
    });

    serde_json::to_string_pretty(&json_summary)
        .map_err(|e| Error::serialization("Failed to render JSON summary", e))
}

fn render_csv_summary(summary: &RunSummary) -> String {
    let path_value = |path: &Option<PathBuf>| {
        path.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    };

    [
        "metric,value".to_string(),
        format!("records_read,{}", summary.records_read),
        format!("duplicates_removed,{}", summary.duplicates_removed),
        format!("invalid_timestamps,{}", summary.invalid_timestamps),
        format!("records_written,{}", summary.records_written),
        format!("dry_run,{}", summary.dry_run),
        format!(
            "processing_time_seconds,{}",
            summary.processing_time.as_secs_f64()
        ),
        format!("output_path,{}", path_value(&summary.output_path)),
        format!("report_path,{}", path_value(&summary.report_path)),
    ]
    .join("\n")
}
