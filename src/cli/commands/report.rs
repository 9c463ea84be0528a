//! Report command implementation
//!
//! Regenerates the quality report from an enriched table already on disk.
//! Nothing is known about the raw input at this point, so the processing
//! summary reports the table size as both original and enhanced counts.

use super::shared::{RunSummary, apply_report_overrides, load_configuration, setup_logging};
use crate::app::services::incident_store::{read_enriched_incidents, write_report};
use crate::app::services::quality_report::report;
use crate::app::services::record_processor::ProcessingStats;
use crate::cli::args::ReportArgs;
use crate::config::Config;
use crate::{Error, Result};
use std::time::Instant;
use tracing::{debug, info};

/// Report command runner
pub async fn run_report(args: ReportArgs) -> Result<RunSummary> {
    args.validate()?;

    let mut config = load_configuration(args.config_file.as_deref())?;
    apply_report_overrides(&mut config, &args);
    setup_logging(&config.logging.level, !config.logging.structured)?;

    info!("Regenerating quality report");
    debug!("Command line arguments: {:?}", args);

    config.validate()?;

    let stdout_only = args.stdout_only;
    let (report_text, summary) =
        tokio::task::spawn_blocking(move || regenerate_report(&config, stdout_only))
            .await
            .map_err(|e| Error::processing_interrupted(format!("Report task failed: {}", e)))??;

    println!("{}", report_text);
    if let Some(path) = &summary.report_path {
        println!("\n✓ Quality report saved to: {}", path.display());
    }

    Ok(summary)
}

/// Read the enriched table and render its quality report
///
/// The report artifact is written unless `stdout_only` is set.
pub fn regenerate_report(config: &Config, stdout_only: bool) -> Result<(String, RunSummary)> {
    let start_time = Instant::now();
    let processing = &config.processing;

    let incidents = read_enriched_incidents(&processing.output_path)?;
    let stats = ProcessingStats::for_enriched_table(incidents.len());
    let report_text = report(&incidents, &stats);

    let mut summary = RunSummary {
        records_read: incidents.len(),
        dry_run: stdout_only,
        ..RunSummary::default()
    };

    if !stdout_only {
        write_report(&processing.report_path, &report_text)?;
        summary.report_path = Some(processing.report_path.clone());
    }

    summary.processing_time = start_time.elapsed();
    Ok((report_text, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::incident_store::write_enriched_incidents;
    use crate::app::services::record_processor::enrich;
    use crate::RawIncident;
    use std::fs;
    use tempfile::TempDir;

    fn enriched_table_config(dir: &std::path::Path) -> Config {
        let (incidents, _) = enrich(vec![
            RawIncident::new("2024-03-01 08:00:00", "FIRE", "1 ELM ST", "Radio: 3A Units: E1"),
            RawIncident::new("2024-03-02 19:30:00", "MEDICAL", "A ST / B ST", "Units: M1, E1"),
        ]);
        let table = dir.join("enhanced.csv");
        write_enriched_incidents(&table, &incidents).unwrap();

        Config::default()
            .with_input_path(dir.join("incidents.csv"))
            .with_output_path(table)
            .with_report_path(dir.join("report.txt"))
    }

    #[test]
    fn test_regenerate_report_summary_counts() {
        let dir = TempDir::new().unwrap();
        let config = enriched_table_config(dir.path());

        let (text, summary) = regenerate_report(&config, false).unwrap();

        assert!(text.contains("Original records:        2"));
        assert!(text.contains("Duplicates removed:      0"));
        assert!(text.contains("Enhanced records:        2"));
        assert_eq!(summary.records_read, 2);
        assert_eq!(fs::read_to_string(dir.path().join("report.txt")).unwrap(), text);
    }

    #[test]
    fn test_stdout_only_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = enriched_table_config(dir.path());

        let (_, summary) = regenerate_report(&config, true).unwrap();

        assert!(summary.report_path.is_none());
        assert!(!dir.path().join("report.txt").exists());
    }

    #[test]
    fn test_missing_enriched_table() {
        let dir = TempDir::new().unwrap();
        let config = Config::default().with_output_path(dir.path().join("absent.csv"));

        assert!(matches!(
            regenerate_report(&config, true),
            Err(Error::FileNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_run_report() {
        let dir = TempDir::new().unwrap();
        enriched_table_config(dir.path());

        let args = ReportArgs {
            input_path: Some(dir.path().join("enhanced.csv")),
            report_path: Some(dir.path().join("regenerated.txt")),
            ..ReportArgs::default()
        };

        let summary = run_report(args).await.unwrap();

        assert_eq!(summary.records_read, 2);
        assert!(dir.path().join("regenerated.txt").exists());
    }
}
