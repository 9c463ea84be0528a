//! Data quality reporting over the enriched incident table
//!
//! The reporter builds local frequency counters over the enriched records and
//! renders a fixed-layout text report. For a given input the output is
//! byte-for-byte reproducible, so it can be diffed between runs.
//!
//! - [`distribution`] - insertion-ordered frequency counting and number formatting
//! - [`report`] - aggregation into [`QualityReport`] and text rendering
//!
//! An empty dataset is not an error: the distribution sections are replaced by
//! a single `NO DATA` section and no percentages are computed.

pub mod distribution;
pub mod report;

#[cfg(test)]
pub mod tests;

pub use distribution::{FrequencyCounter, format_thousands};
pub use report::{
    DatasetProfile, DateRange, QualityReport, UnitCountSummary, generate_quality_report, report,
};
