//! Tests for the quality report module

pub mod report_tests;

use crate::app::models::{EnrichedIncident, RawIncident};
use crate::app::services::record_processor::{ProcessingStats, enrich};

/// Enrich the week-spanning three incident fixture
pub fn create_enriched_week() -> (Vec<EnrichedIncident>, ProcessingStats) {
    enrich(vec![
        RawIncident::new(
            "2024-01-01 07:15:00",
            "MEDICAL EMERGENCY",
            "100 BLOCK OF MAIN ST",
            "Radio: 9C Units: M1",
        ),
        RawIncident::new(
            "2024-01-03 13:40:00",
            "VEHICLE ACCIDENT",
            "MAIN ST / 2ND ST",
            "Units: E1, T1, M1",
        ),
        RawIncident::new(
            "2024-01-06 22:05:00",
            "STRUCTURE FIRE",
            "2400 OAK AVE, Apt/Unit:3, Oak Court",
            "Radio: 4A Units: E1, E2, L1, BC1",
        ),
    ])
}

/// Enrich a year of incidents, one per month, with repeated events
pub fn create_enriched_year() -> (Vec<EnrichedIncident>, ProcessingStats) {
    let events = ["FIRE ALARM", "MEDICAL EMERGENCY", "FIRE ALARM", "SMOKE"];
    let raw = (1..=12usize)
        .map(|month| {
            RawIncident::new(
                format!("2023-{:02}-{:02} {:02}:30:00", month, month + 10, month * 2 - 1),
                events[month % events.len()],
                format!("{} ELM ST", month * 100),
                if month % 3 == 0 { "Units: E1" } else { "Radio: 2B Units: E1, E2" },
            )
        })
        .collect();
    enrich(raw)
}

/// Render lines and split back into a vector for line-level assertions
pub fn lines_of(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}
