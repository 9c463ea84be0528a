//! Timestamp parsing and temporal attribute derivation

use crate::app::models::{DayOfWeek, Season, TimePeriod};
use crate::constants::TIMESTAMP_FORMAT;
use crate::{Error, Result};
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Calendar and time-bucket attributes of an incident timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub day_of_week: DayOfWeek,
    pub hour: u32,
    pub time_period: TimePeriod,
    pub is_weekend: bool,
    pub season: Season,
    /// ISO-8601 week number
    pub week_of_year: u32,
}

/// Parse an incident timestamp in the fixed `YYYY-MM-DD HH:MM:SS` format
///
/// Timestamps are local wall-clock times with no zone information, so they
/// are kept naive.
pub fn parse_incident_timestamp(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).map_err(|e| {
        Error::datetime_parsing(
            format!(
                "Invalid incident timestamp '{}' (expected 'YYYY-MM-DD HH:MM:SS')",
                raw
            ),
            e,
        )
    })
}

/// Derive temporal attributes from a parsed timestamp
///
/// Total and pure: every valid datetime maps to exactly one set of fields.
pub fn derive_temporal(ts: &NaiveDateTime) -> TemporalFields {
    let day_of_week = DayOfWeek::from(ts.weekday());
    let hour = ts.hour();
    let month = ts.month();

    TemporalFields {
        year: ts.year(),
        month,
        day: ts.day(),
        day_of_week,
        hour,
        time_period: TimePeriod::from_hour(hour),
        is_weekend: day_of_week.is_weekend(),
        season: Season::from_month(month),
        week_of_year: ts.iso_week().week(),
    }
}
