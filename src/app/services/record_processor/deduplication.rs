//! Incident deduplication
//!
//! The collector appends whatever the source page shows on each poll, so the
//! same incident is often captured several times. Two rows are the same
//! incident when their (datetime, event, location) strings are byte-for-byte
//! equal. No case or whitespace normalization is applied.

use crate::app::models::RawIncident;
use indicatif::ProgressBar;
use std::collections::HashSet;
use tracing::{debug, info};

/// Result of a deduplication pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeduplicationOutcome {
    /// First occurrence of every key, in input order
    pub unique: Vec<RawIncident>,
    /// Number of later occurrences that were dropped
    pub duplicates_removed: usize,
}

/// Remove duplicate incidents, keeping the first occurrence of each key
///
/// Single pass, order preserving. `unique.len() == input.len() - duplicates_removed`.
///
/// # Arguments
///
/// * `incidents` - Raw incidents in collector order
/// * `progress_bar` - Optional progress bar advanced once per input row
pub fn deduplicate_incidents(
    incidents: Vec<RawIncident>,
    progress_bar: Option<&ProgressBar>,
) -> DeduplicationOutcome {
    let input_count = incidents.len();
    let keep = first_occurrence_mask(&incidents, progress_bar);

    let unique: Vec<RawIncident> = incidents
        .into_iter()
        .zip(keep)
        .filter_map(|(incident, keep)| keep.then_some(incident))
        .collect();

    let duplicates_removed = input_count - unique.len();

    info!(
        "Deduplication complete: removed {} duplicates, {} incidents remaining",
        duplicates_removed,
        unique.len()
    );

    DeduplicationOutcome {
        unique,
        duplicates_removed,
    }
}

/// Mark the first occurrence of each dedup key
fn first_occurrence_mask(incidents: &[RawIncident], progress_bar: Option<&ProgressBar>) -> Vec<bool> {
    let mut seen: HashSet<(&str, &str, &str)> = HashSet::with_capacity(incidents.len());
    let mut mask = Vec::with_capacity(incidents.len());

    for incident in incidents {
        let first = seen.insert(incident.dedup_key());
        if !first {
            debug!("Duplicate incident dropped: {:?}", incident.dedup_key());
        }
        mask.push(first);

        if let Some(pb) = progress_bar {
            pb.inc(1);
        }
    }

    mask
}
