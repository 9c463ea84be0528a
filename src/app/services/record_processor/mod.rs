//! Record processing module for dispatch incidents
//!
//! This module provides the enrichment pipeline that runs after the raw table
//! has been read. It removes duplicate incidents and turns every surviving
//! record into an [`EnrichedIncident`](crate::app::models::EnrichedIncident).
//!
//! # Architecture
//!
//! - [`processor`] - Main RecordProcessor struct and pipeline orchestration
//! - [`deduplication`] - First-occurrence deduplication by (datetime, event, location)
//! - [`enrichment`] - Per-record parsing into the enriched schema
//! - [`stats`] - Processing statistics and result structures
//!
//! # Error Tolerance
//!
//! A record whose timestamp does not match `YYYY-MM-DD HH:MM:SS` is logged,
//! counted in [`ProcessingStats::invalid_timestamps`] and left out of the
//! output. That is the only per-record failure; the units and location parsers
//! always produce a result.
//!
//! # Example Usage
//!
//! ```rust
//! use incident_processor::RawIncident;
//! use incident_processor::app::services::record_processor::enrich;
//!
//! let raw = vec![
//!     RawIncident::new("2024-05-01 14:03:22", "FIRE ALARM", "9 BAY ST", "Units: E1"),
//!     RawIncident::new("2024-05-01 14:03:22", "FIRE ALARM", "9 BAY ST", "Units: E1, L1"),
//! ];
//!
//! let (incidents, stats) = enrich(raw);
//! assert_eq!(incidents.len(), 1);
//! assert_eq!(stats.duplicates_removed, 1);
//! ```

pub mod deduplication;
pub mod enrichment;
pub mod processor;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use processor::{RecordProcessor, enrich};
pub use stats::{ProcessingResult, ProcessingStats};

// Re-export utility functions that might be useful externally
pub use deduplication::{DeduplicationOutcome, deduplicate_incidents};
pub use enrichment::enrich_incident;
