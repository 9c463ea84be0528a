//! Processing statistics and result structures for the enrichment pipeline
//!
//! This module provides types for tracking how many records entered the
//! pipeline, how many were dropped at each stage, and for carrying the
//! enriched records to the writers and the quality reporter.

use crate::app::models::EnrichedIncident;
use serde::Serialize;

/// Statistics for an enrichment run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingStats {
    /// Number of rows read from the raw table
    pub total_original: usize,
    /// Number of rows dropped as (datetime, event, location) duplicates
    pub duplicates_removed: usize,
    /// Number of unique rows skipped because their timestamp did not parse
    pub invalid_timestamps: usize,
    /// Number of enriched rows produced
    pub total_enhanced: usize,
}

impl ProcessingStats {
    /// Create new empty processing statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics describing an already-enriched table read back from disk
    ///
    /// Nothing is known about the raw input, so every row counts as original
    /// and enhanced with no duplicates.
    pub fn for_enriched_table(record_count: usize) -> Self {
        Self {
            total_original: record_count,
            total_enhanced: record_count,
            ..Self::default()
        }
    }

    /// Count a record skipped for an unparseable timestamp
    pub fn add_invalid_timestamp(&mut self) {
        self.invalid_timestamps += 1;
    }

    /// Percentage of raw rows that made it into the enriched table
    pub fn success_rate(&self) -> f64 {
        if self.total_original == 0 {
            100.0
        } else {
            (self.total_enhanced as f64 / self.total_original as f64) * 100.0
        }
    }

    /// Percentage of raw rows that were duplicates
    pub fn duplicate_rate(&self) -> f64 {
        if self.total_original == 0 {
            0.0
        } else {
            (self.duplicates_removed as f64 / self.total_original as f64) * 100.0
        }
    }

    /// Whether every unique record was enriched
    pub fn is_complete(&self) -> bool {
        self.invalid_timestamps == 0
    }

    /// Get summary of processing pipeline statistics
    pub fn summary(&self) -> String {
        format!(
            "Processing Summary: {} -> {} incidents ({:.1}% retained) | \
             Duplicates: {} ({:.1}%) | Invalid timestamps: {}",
            self.total_original,
            self.total_enhanced,
            self.success_rate(),
            self.duplicates_removed,
            self.duplicate_rate(),
            self.invalid_timestamps
        )
    }
}

/// Result of an enrichment run
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Enriched incidents in dedup-surviving input order
    pub incidents: Vec<EnrichedIncident>,
    /// Processing statistics
    pub stats: ProcessingStats,
}

impl ProcessingResult {
    /// Create a new processing result
    pub fn new(incidents: Vec<EnrichedIncident>, stats: ProcessingStats) -> Self {
        Self { incidents, stats }
    }

    /// Split into the enriched records and the statistics
    pub fn into_parts(self) -> (Vec<EnrichedIncident>, ProcessingStats) {
        (self.incidents, self.stats)
    }
}
