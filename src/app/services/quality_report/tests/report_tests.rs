//! Tests for report aggregation and rendering

use super::*;
use crate::app::models::{LocationType, Season, TimePeriod};
use crate::app::services::quality_report::{generate_quality_report, report};
use crate::app::services::record_processor::ProcessingStats;

#[test]
fn test_full_render_is_exact() {
    let (incidents, stats) = create_enriched_week();
    let rule = "=".repeat(70);
    let dash = "-".repeat(70);

    let expected = [
        rule.as_str(),
        "DATA QUALITY REPORT - Phase 1 Enhancement",
        rule.as_str(),
        "",
        "PROCESSING SUMMARY",
        dash.as_str(),
        "Original records:        3",
        "Duplicates removed:      0",
        "Enhanced records:        3",
        "",
        "DATE RANGE",
        dash.as_str(),
        "First incident:          2024-01-01 07:15:00",
        "Last incident:           2024-01-06 22:05:00",
        "Total days covered:      5",
        "",
        "TOP 10 EVENT TYPES",
        dash.as_str(),
        "    1 ( 33.3%) - MEDICAL EMERGENCY",
        "    1 ( 33.3%) - VEHICLE ACCIDENT",
        "    1 ( 33.3%) - STRUCTURE FIRE",
        "",
        "LOCATION TYPE DISTRIBUTION",
        dash.as_str(),
        "    1 ( 33.3%) - BLOCK",
        "    1 ( 33.3%) - INTERSECTION",
        "    1 ( 33.3%) - ADDRESS",
        "",
        "RADIO CHANNEL DISTRIBUTION",
        dash.as_str(),
        "With radio channel:      2",
        "Without radio channel:   1",
        "",
        "Top radio channels:",
        "  9C: 1",
        "  4A: 1",
        "",
        "UNIT COUNT STATISTICS",
        dash.as_str(),
        "Average units per incident:  2.67",
        "Minimum units:               1",
        "Maximum units:               4",
        "",
        "TIME PERIOD DISTRIBUTION",
        dash.as_str(),
        "    1 ( 33.3%) - Morning",
        "    1 ( 33.3%) - Afternoon",
        "    0 (  0.0%) - Evening",
        "    1 ( 33.3%) - Night",
        "",
        "DAY OF WEEK DISTRIBUTION",
        dash.as_str(),
        "    1 ( 33.3%) - Monday",
        "    0 (  0.0%) - Tuesday",
        "    1 ( 33.3%) - Wednesday",
        "    0 (  0.0%) - Thursday",
        "    0 (  0.0%) - Friday",
        "    1 ( 33.3%) - Saturday",
        "    0 (  0.0%) - Sunday",
        "",
        "WEEKEND vs WEEKDAY",
        dash.as_str(),
        "Weekday incidents:       2 (66.7%)",
        "Weekend incidents:       1 (33.3%)",
        "",
        "SEASONAL DISTRIBUTION",
        dash.as_str(),
        "    3 (100.0%) - Winter",
        "    0 (  0.0%) - Spring",
        "    0 (  0.0%) - Summer",
        "    0 (  0.0%) - Fall",
        "",
        rule.as_str(),
    ]
    .join("\n");

    assert_eq!(report(&incidents, &stats), expected);
}

#[test]
fn test_render_has_no_trailing_newline() {
    let (incidents, stats) = create_enriched_week();
    let text = report(&incidents, &stats);
    assert!(text.ends_with(&"=".repeat(70)));
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_render_is_reproducible() {
    let (incidents, stats) = create_enriched_year();
    assert_eq!(report(&incidents, &stats), report(&incidents, &stats));
}

#[test]
fn test_event_ranking_and_ties() {
    let (incidents, stats) = create_enriched_year();
    let quality = generate_quality_report(&incidents, &stats);
    let profile = quality.profile.expect("year fixture has data");

    // MEDICAL EMERGENCY is seen before SMOKE and ties with it
    assert_eq!(
        profile.top_events,
        vec![
            ("FIRE ALARM".to_string(), 6),
            ("MEDICAL EMERGENCY".to_string(), 3),
            ("SMOKE".to_string(), 3),
        ]
    );
    assert_eq!(profile.location_types, vec![(LocationType::Address, 12)]);
}

#[test]
fn test_year_aggregates() {
    let (incidents, stats) = create_enriched_year();
    let profile = generate_quality_report(&incidents, &stats)
        .profile
        .expect("year fixture has data");

    let range = profile.date_range.expect("timestamps parse");
    assert_eq!(range.days_covered(), 345);

    assert_eq!(profile.with_radio_channel, 8);
    assert_eq!(profile.without_radio_channel, 4);
    assert_eq!(profile.top_radio_channels, vec![("2B".to_string(), 8)]);

    assert!((profile.unit_counts.mean - 20.0 / 12.0).abs() < 1e-9);
    assert_eq!(profile.unit_counts.min, 1);
    assert_eq!(profile.unit_counts.max, 2);

    assert_eq!(
        profile.time_periods,
        vec![
            (TimePeriod::Morning, 3),
            (TimePeriod::Afternoon, 2),
            (TimePeriod::Evening, 2),
            (TimePeriod::Night, 5),
        ]
    );
    assert!(profile.seasons.iter().all(|(_, count)| *count == 3));
    assert_eq!(profile.seasons[0].0, Season::Winter);
}

#[test]
fn test_percentage_closure() {
    let (incidents, stats) = create_enriched_year();
    let text = report(&incidents, &stats);

    for section in [
        "TIME PERIOD DISTRIBUTION",
        "DAY OF WEEK DISTRIBUTION",
        "SEASONAL DISTRIBUTION",
    ] {
        let total: f64 = lines_of(&text)
            .iter()
            .skip_while(|line| **line != section)
            .skip(2)
            .take_while(|line| !line.is_empty())
            .map(|line| {
                let open = line.find('(').unwrap();
                let close = line.find('%').unwrap();
                line[open + 1..close].trim().parse::<f64>().unwrap()
            })
            .sum();
        assert!((total - 100.0).abs() <= 0.5, "{} sums to {}", section, total);
    }
}

#[test]
fn test_empty_dataset_renders_no_data() {
    let stats = ProcessingStats {
        total_original: 2,
        duplicates_removed: 0,
        invalid_timestamps: 2,
        total_enhanced: 0,
    };

    let quality = generate_quality_report(&[], &stats);
    assert!(quality.profile.is_none());

    let text = quality.render();
    let lines = lines_of(&text);
    assert!(lines.contains(&"NO DATA"));
    assert!(lines.contains(&"Original records:        2"));
    assert!(!text.contains("DATE RANGE"));
    assert!(!text.contains("NaN"));
    assert_eq!(lines.last(), Some(&"=".repeat(70).as_str()));
}

#[test]
fn test_summary_counts_use_thousands_separators() {
    let (incidents, _) = create_enriched_week();
    let stats = ProcessingStats {
        total_original: 12_345,
        duplicates_removed: 1_000,
        invalid_timestamps: 0,
        total_enhanced: 11_345,
    };

    let text = report(&incidents, &stats);

    assert!(text.contains("Original records:        12,345"));
    assert!(text.contains("Duplicates removed:      1,000"));
    assert!(text.contains("Enhanced records:        11,345"));
}
