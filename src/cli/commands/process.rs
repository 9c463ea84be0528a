//! Process command implementation
//!
//! This module contains the complete enrichment workflow: configuration
//! loading, reading the raw table, the record pipeline, atomic output and
//! quality report generation.

use super::shared::{
    RunSummary, apply_process_overrides, load_configuration, render_summary, setup_logging,
};
use crate::app::services::incident_store::{
    read_enriched_incidents, read_raw_incidents, write_enriched_incidents, write_report,
};
use crate::app::services::quality_report::report;
use crate::app::services::record_processor::RecordProcessor;
use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::config::Config;
use crate::{Error, Result};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Result of one pipeline execution
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub summary: RunSummary,
    /// Rendered quality report, unless reporting was disabled
    pub report_text: Option<String>,
}

/// Process command runner
///
/// 1. Resolve configuration and set up logging
/// 2. Run the pipeline on a blocking worker thread
/// 3. Print the quality report and the run summary
pub async fn run_process(args: ProcessArgs) -> Result<RunSummary> {
    args.validate()?;

    let mut config = load_configuration(args.config_file.as_deref())?;
    apply_process_overrides(&mut config, &args);
    setup_logging(&config.logging.level, !config.logging.structured)?;

    info!("Starting incident processor");
    debug!("Command line arguments: {:?}", args);

    config.validate()?;
    debug!("Loaded configuration: {:?}", config);

    let outcome = tokio::task::spawn_blocking(move || execute_pipeline(&config))
        .await
        .map_err(|e| Error::processing_interrupted(format!("Pipeline task failed: {}", e)))??;

    if let (Some(report_text), OutputFormat::Human) = (&outcome.report_text, args.output_format) {
        println!("{}", report_text);
    }

    generate_final_report(&outcome.summary, args.output_format)?;
    Ok(outcome.summary)
}

/// Run the synchronous pipeline described by `config`
///
/// Reads the raw table, enriches it, writes the enriched table and then
/// builds the quality report from the table as written. In dry-run mode
/// nothing is written and the report is built from memory.
pub fn execute_pipeline(config: &Config) -> Result<PipelineOutcome> {
    let start_time = Instant::now();
    let processing = &config.processing;

    info!("Reading {}", processing.input_path.display());
    let raw = read_raw_incidents(&processing.input_path)?;

    let result = RecordProcessor::new(processing.show_progress).process_incidents(raw);

    if !result.stats.is_complete() {
        warn!(
            "{} incidents skipped for invalid timestamps",
            result.stats.invalid_timestamps
        );
    }

    let (incidents, stats) = result.into_parts();
    let mut summary = RunSummary {
        records_read: stats.total_original,
        duplicates_removed: stats.duplicates_removed,
        invalid_timestamps: stats.invalid_timestamps,
        records_written: 0,
        dry_run: processing.dry_run,
        ..RunSummary::default()
    };

    if processing.dry_run {
        info!("Dry run - no files will be written");
        let report_text = processing
            .write_report
            .then(|| report(&incidents, &stats));
        summary.records_written = incidents.len();
        summary.processing_time = start_time.elapsed();
        return Ok(PipelineOutcome {
            summary,
            report_text,
        });
    }

    write_enriched_incidents(&processing.output_path, &incidents)?;
    summary.records_written = incidents.len();
    summary.output_path = Some(processing.output_path.clone());
    drop(incidents);

    let report_text = if processing.write_report {
        info!("Reading enriched data for quality report");
        let enriched = read_enriched_incidents(&processing.output_path)?;
        let text = report(&enriched, &stats);
        write_report(&processing.report_path, &text)?;
        summary.report_path = Some(processing.report_path.clone());
        Some(text)
    } else {
        None
    };

    summary.processing_time = start_time.elapsed();
    Ok(PipelineOutcome {
        summary,
        report_text,
    })
}

/// Print the final run summary
fn generate_final_report(summary: &RunSummary, format: OutputFormat) -> Result<()> {
    info!("Generating final report");
    println!("{}", render_summary(summary, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const RAW: &str = "\
Datetime,Event,Location,Units
2024-02-10 09:00:00,FIRE ALARM,9 BAY ST,Units: E1
2024-02-10 09:05:00,SMOKE INVESTIGATION,9 BAY ST,Units: E2
2024-02-10 09:00:00,FIRE ALARM,9 BAY ST,\"Radio: 9C Units: E1, L1\"
";

    fn config_in(dir: &Path) -> Config {
        let input = dir.join("incidents.csv");
        fs::write(&input, RAW).unwrap();

        let mut config = Config::default()
            .with_input_path(input)
            .with_output_path(dir.join("incidents_enhanced.csv"))
            .with_report_path(dir.join("report.txt"));
        config.processing.show_progress = false;
        config
    }

    #[test]
    fn test_execute_pipeline_writes_outputs() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path());

        let outcome = execute_pipeline(&config).unwrap();

        assert_eq!(outcome.summary.records_read, 3);
        assert_eq!(outcome.summary.duplicates_removed, 1);
        assert_eq!(outcome.summary.records_written, 2);

        let table = fs::read_to_string(dir.path().join("incidents_enhanced.csv")).unwrap();
        assert_eq!(table.lines().count(), 3);

        let report_text = fs::read_to_string(dir.path().join("report.txt")).unwrap();
        assert_eq!(Some(report_text.clone()), outcome.report_text);
        assert!(report_text.contains("Duplicates removed:      1"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(dir.path());
        config.processing.dry_run = true;

        let outcome = execute_pipeline(&config).unwrap();

        assert!(outcome.summary.dry_run);
        assert_eq!(outcome.summary.records_written, 2);
        assert!(outcome.report_text.is_some());
        assert!(outcome.summary.written_paths().is_empty());
        assert!(!dir.path().join("incidents_enhanced.csv").exists());
        assert!(!dir.path().join("report.txt").exists());
    }

    #[test]
    fn test_no_report() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(dir.path());
        config.processing.write_report = false;

        let outcome = execute_pipeline(&config).unwrap();

        assert!(outcome.report_text.is_none());
        assert!(dir.path().join("incidents_enhanced.csv").exists());
        assert!(!dir.path().join("report.txt").exists());
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = Config::default()
            .with_input_path(dir.path().join("absent.csv"))
            .with_output_path(dir.path().join("out.csv"))
            .with_report_path(dir.path().join("report.txt"));

        let result = execute_pipeline(&config);

        assert!(matches!(result, Err(Error::FileNotFound { .. })));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_run_process_json() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("incidents.csv");
        fs::write(&input, RAW).unwrap();
        let config_file = dir.path().join("config.toml");
        fs::write(&config_file, "[processing]\nshow_progress = false\n").unwrap();

        let args = ProcessArgs {
            input_path: Some(input),
            output_path: Some(dir.path().join("enhanced.csv")),
            report_path: Some(dir.path().join("report.txt")),
            config_file: Some(config_file),
            output_format: OutputFormat::Json,
            ..ProcessArgs::default()
        };

        let summary = run_process(args).await.unwrap();

        assert_eq!(summary.records_written, 2);
        assert!(dir.path().join("enhanced.csv").exists());
        assert!(dir.path().join("report.txt").exists());
    }
}
