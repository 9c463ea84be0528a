//! Tests for processing statistics

use crate::app::services::record_processor::stats::{ProcessingResult, ProcessingStats};

#[test]
fn test_new_stats_are_empty() {
    let stats = ProcessingStats::new();
    assert_eq!(stats.total_original, 0);
    assert_eq!(stats.duplicates_removed, 0);
    assert_eq!(stats.invalid_timestamps, 0);
    assert_eq!(stats.total_enhanced, 0);
    assert!(stats.is_complete());
}

#[test]
fn test_rates() {
    let stats = ProcessingStats {
        total_original: 200,
        duplicates_removed: 50,
        invalid_timestamps: 10,
        total_enhanced: 140,
    };

    assert!((stats.success_rate() - 70.0).abs() < 1e-9);
    assert!((stats.duplicate_rate() - 25.0).abs() < 1e-9);
    assert!(!stats.is_complete());
}

#[test]
fn test_rates_with_no_input() {
    let stats = ProcessingStats::new();
    assert_eq!(stats.success_rate(), 100.0);
    assert_eq!(stats.duplicate_rate(), 0.0);
}

#[test]
fn test_add_invalid_timestamp() {
    let mut stats = ProcessingStats::new();
    stats.add_invalid_timestamp();
    stats.add_invalid_timestamp();

    assert_eq!(stats.invalid_timestamps, 2);
    assert!(!stats.is_complete());
}

#[test]
fn test_for_enriched_table() {
    let stats = ProcessingStats::for_enriched_table(42);
    assert_eq!(stats.total_original, 42);
    assert_eq!(stats.total_enhanced, 42);
    assert_eq!(stats.duplicates_removed, 0);
}

#[test]
fn test_summary_format() {
    let stats = ProcessingStats {
        total_original: 10,
        duplicates_removed: 2,
        invalid_timestamps: 1,
        total_enhanced: 7,
    };

    assert_eq!(
        stats.summary(),
        "Processing Summary: 10 -> 7 incidents (70.0% retained) | \
         Duplicates: 2 (20.0%) | Invalid timestamps: 1"
    );
}

#[test]
fn test_stats_json_carries_counts_only() {
    let mut stats = ProcessingStats::for_enriched_table(3);
    stats.add_invalid_timestamp();

    let json = serde_json::to_value(&stats).unwrap();

    assert_eq!(json["total_original"], 3);
    assert_eq!(json["invalid_timestamps"], 1);
    assert_eq!(json.as_object().map(|fields| fields.len()), Some(4));
}

#[test]
fn test_processing_result_into_parts() {
    let result = ProcessingResult::new(Vec::new(), ProcessingStats::for_enriched_table(0));
    assert!(result.incidents.is_empty());

    let (incidents, stats) = result.into_parts();
    assert!(incidents.is_empty());
    assert_eq!(stats.total_enhanced, 0);
}
