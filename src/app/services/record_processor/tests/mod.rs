//! Tests for the record processor module
//!
//! This module provides unit tests for all record processing components and
//! the fixtures they share.

pub mod stats_tests;

// Test helper functions and fixtures
use crate::app::models::RawIncident;

/// Create a raw incident with the given key fields and a default units text
pub fn create_raw_incident(datetime: &str, event: &str, location: &str) -> RawIncident {
    RawIncident::new(datetime, event, location, "Radio: 9C Units: E1, T1")
}

/// Create a small table of distinct incidents spanning the week
pub fn create_unique_incidents() -> Vec<RawIncident> {
    vec![
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
    ]
}

/// Create the three-row scenario where rows 1 and 3 share a dedup key
pub fn create_duplicate_scenario() -> Vec<RawIncident> {
    vec![
        RawIncident::new(
            "2024-02-10 09:00:00",
            "FIRE ALARM",
            "9 BAY ST",
            "Units: E1",
        ),
        RawIncident::new(
            "2024-02-10 09:05:00",
            "SMOKE INVESTIGATION",
            "9 BAY ST",
            "Units: E2",
        ),
        RawIncident::new(
            "2024-02-10 09:00:00",
            "FIRE ALARM",
            "9 BAY ST",
            "Radio: 9C Units: E1, L1",
        ),
    ]
}
