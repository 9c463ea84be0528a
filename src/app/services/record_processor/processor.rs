//! Main record processor implementation and pipeline orchestration
//!
//! This module contains the RecordProcessor struct and coordinates the
//! enrichment pipeline: deduplication followed by per-record parsing and
//! temporal derivation.

use crate::app::models::{EnrichedIncident, RawIncident};
use crate::constants::PROGRESS_LOG_INTERVAL;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use super::{
    deduplication::deduplicate_incidents,
    enrichment::enrich_incident,
    stats::{ProcessingResult, ProcessingStats},
};

/// Record processor for raw dispatch incidents
///
/// Takes the full raw table in memory and returns the enriched records with
/// statistics. Processing is synchronous and deterministic: the same input
/// always yields the same records in the same order.
///
/// # Example
///
/// ```rust
/// use incident_processor::RawIncident;
/// use incident_processor::app::services::record_processor::RecordProcessor;
///
/// let raw = vec![RawIncident::new(
///     "2024-05-01 14:03:22",
///     "MEDICAL EMERGENCY",
///     "100 BLOCK OF MAIN ST",
///     "Radio: 9C Units: M1",
/// )];
///
/// let result = RecordProcessor::new(false).process_incidents(raw);
/// assert_eq!(result.stats.total_enhanced, 1);
/// assert_eq!(result.incidents[0].radio_channel, "9C");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordProcessor {
    /// Whether to draw progress bars for each stage
    show_progress: bool,
}

impl RecordProcessor {
    /// Create a new record processor
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }

    /// Process raw incidents through the full pipeline
    ///
    /// 1. Deduplicate by (datetime, event, location), keeping first occurrences
    /// 2. Parse each survivor's timestamp; skip and count failures
    /// 3. Decode units and location, derive temporal fields
    ///
    /// Output order is the dedup-surviving input order.
    pub fn process_incidents(&self, incidents: Vec<RawIncident>) -> ProcessingResult {
        let mut stats = ProcessingStats::new();
        stats.total_original = incidents.len();

        info!(
            "Starting record processing pipeline for {} incidents",
            incidents.len()
        );

        // Step 1: Deduplicate
        let dedup_pb = self.stage_progress_bar(incidents.len(), "Deduplication");
        let outcome = deduplicate_incidents(incidents, dedup_pb.as_ref());
        stats.duplicates_removed = outcome.duplicates_removed;

        if let Some(pb) = dedup_pb {
            pb.finish_with_message(format!(
                "Deduplication complete: {} unique incidents",
                outcome.unique.len()
            ));
        }

        // Step 2: Enrich each surviving record
        let enrich_pb = self.stage_progress_bar(outcome.unique.len(), "Enrichment");
        let enriched = enrich_all(&outcome.unique, &mut stats, enrich_pb.as_ref());
        stats.total_enhanced = enriched.len();

        if let Some(pb) = enrich_pb {
            pb.finish_with_message(format!(
                "Enrichment complete: {} incidents",
                enriched.len()
            ));
        }

        info!("{}", stats.summary());

        ProcessingResult::new(enriched, stats)
    }

    /// Create a progress bar for a pipeline stage
    fn stage_progress_bar(&self, total: usize, stage: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message(stage.to_string());
        Some(pb)
    }
}

/// Enrich every record, skipping those with malformed timestamps
fn enrich_all(
    incidents: &[RawIncident],
    stats: &mut ProcessingStats,
    progress_bar: Option<&ProgressBar>,
) -> Vec<EnrichedIncident> {
    let total = incidents.len();
    let mut enriched = Vec::with_capacity(total);

    for (index, incident) in incidents.iter().enumerate() {
        if index % PROGRESS_LOG_INTERVAL == 0 {
            info!("Processed {}/{} records...", index, total);
        }

        match enrich_incident(incident) {
            Ok(record) => enriched.push(record),
            Err(e) => {
                warn!(
                    "Invalid datetime at index {}: {} ({})",
                    index, incident.datetime, e
                );
                stats.add_invalid_timestamp();
            }
        }

        if let Some(pb) = progress_bar {
            pb.inc(1);
        }
    }

    info!("Processed {}/{} records", enriched.len(), total);
    enriched
}

/// Enrich a raw table in one call
///
/// Equivalent to `RecordProcessor::new(false).process_incidents(raw)` split
/// into records and statistics.
pub fn enrich(raw: Vec<RawIncident>) -> (Vec<EnrichedIncident>, ProcessingStats) {
    RecordProcessor::new(false).process_incidents(raw).into_parts()
}
