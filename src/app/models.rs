//! Data models for incident processing
//!
//! This module contains the fixed-schema record types for each pipeline stage:
//! the raw dispatch rows exactly as the collector wrote them, and the enriched
//! rows carrying the parsed units, location and temporal attributes.

use crate::constants::columns;
use crate::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Raw Incident Structure
// =============================================================================

/// A single dispatch incident as published by the source feed
///
/// Field values are kept verbatim. The timestamp stays a string here because
/// malformed values must survive long enough to be counted and skipped by the
/// enrichment pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawIncident {
    /// Local timestamp, expected as `YYYY-MM-DD HH:MM:SS`
    #[serde(rename = "Datetime")]
    pub datetime: String,

    /// Incident type as dispatched (e.g., "STRUCTURE FIRE")
    #[serde(rename = "Event")]
    pub event: String,

    /// Free-text location notation
    #[serde(rename = "Location")]
    pub location: String,

    /// Free-text units notation, optionally carrying a radio channel
    #[serde(rename = "Units")]
    pub units: String,
}

impl RawIncident {
    /// Create a new raw incident from its four source fields
    pub fn new(
        datetime: impl Into<String>,
        event: impl Into<String>,
        location: impl Into<String>,
        units: impl Into<String>,
    ) -> Self {
        Self {
            datetime: datetime.into(),
            event: event.into(),
            location: location.into(),
            units: units.into(),
        }
    }

    /// Key used for deduplication: exact (datetime, event, location)
    pub fn dedup_key(&self) -> (&str, &str, &str) {
        (&self.datetime, &self.event, &self.location)
    }
}

// =============================================================================
// Enriched Incident Structure
// =============================================================================

/// An incident with all derived fields attached
///
/// Field order is the column order of the enriched table and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnrichedIncident {
    pub datetime: String,
    pub event: String,
    pub location: String,
    pub units: String,

    /// Dispatch radio channel, empty when the units text carried none
    pub radio_channel: String,
    /// Units text with any radio/units prefix stripped
    pub units_list: String,
    /// Number of comma-separated tokens in `units_list` (never zero)
    pub unit_count: usize,

    pub location_type: LocationType,
    pub street_address: String,
    /// Only populated for intersections
    pub cross_street: String,
    pub apartment_unit: String,
    pub building_name: String,

    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub day_of_week: DayOfWeek,
    pub hour: u32,
    pub time_period: TimePeriod,
    #[serde(with = "yes_no")]
    pub is_weekend: bool,
    pub season: Season,
    pub week_of_year: u32,
}

impl EnrichedIncident {
    /// Key used for deduplication: exact (datetime, event, location)
    pub fn dedup_key(&self) -> (&str, &str, &str) {
        (&self.datetime, &self.event, &self.location)
    }

    /// Parse the stored timestamp back into a datetime
    pub fn timestamp(&self) -> Result<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.datetime, crate::constants::TIMESTAMP_FORMAT)
            .map_err(|e| {
                Error::datetime_parsing(format!("Invalid incident timestamp '{}'", self.datetime), e)
            })
    }

    /// Column headers of the enriched table, in serialization order
    pub fn column_names() -> &'static [&'static str] {
        columns::ENRICHED
    }
}

// =============================================================================
// Categorical Fields
// =============================================================================

/// Classification of a location string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LocationType {
    /// Two crossing streets joined by `/`
    Intersection,
    /// Approximate street segment ("100 BLOCK OF MAIN ST")
    Block,
    /// Anything else, treated as an exact address
    Address,
}

impl LocationType {
    pub const ALL: [LocationType; 3] = [
        LocationType::Intersection,
        LocationType::Block,
        LocationType::Address,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LocationType::Intersection => "INTERSECTION",
            LocationType::Block => "BLOCK",
            LocationType::Address => "ADDRESS",
        }
    }
}

/// Day of the week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days in reporting order
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn is_weekend(self) -> bool {
        matches!(self, DayOfWeek::Saturday | DayOfWeek::Sunday)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => DayOfWeek::Monday,
            chrono::Weekday::Tue => DayOfWeek::Tuesday,
            chrono::Weekday::Wed => DayOfWeek::Wednesday,
            chrono::Weekday::Thu => DayOfWeek::Thursday,
            chrono::Weekday::Fri => DayOfWeek::Friday,
            chrono::Weekday::Sat => DayOfWeek::Saturday,
            chrono::Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// Clock-hour bucket used for behavioural analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum TimePeriod {
    /// 06:00 - 11:59
    Morning,
    /// 12:00 - 16:59
    Afternoon,
    /// 17:00 - 20:59
    Evening,
    /// 21:00 - 05:59
    Night,
}

impl TimePeriod {
    /// All periods in reporting order
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::Morning,
        TimePeriod::Afternoon,
        TimePeriod::Evening,
        TimePeriod::Night,
    ];

    /// Bucket an hour of the day (0-23)
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => TimePeriod::Morning,
            12..=16 => TimePeriod::Afternoon,
            17..=20 => TimePeriod::Evening,
            _ => TimePeriod::Night,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimePeriod::Morning => "Morning",
            TimePeriod::Afternoon => "Afternoon",
            TimePeriod::Evening => "Evening",
            TimePeriod::Night => "Night",
        }
    }
}

/// Meteorological season (month groups, not solstices)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// All seasons in reporting order
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    /// Map a calendar month (1-12) to its season
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Fall,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }
}

macro_rules! impl_display_from_str {
    ($($ty:ident),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = Error;

                fn from_str(s: &str) -> Result<Self> {
                    let trimmed = s.trim();
                    $ty::ALL
                        .iter()
                        .copied()
                        .find(|value| value.as_str() == trimmed)
                        .ok_or_else(|| {
                            Error::data_validation(format!(
                                "Invalid {} value '{}'",
                                stringify!($ty),
                                s
                            ))
                        })
                }
            }
        )*
    };
}

impl_display_from_str!(LocationType, DayOfWeek, TimePeriod, Season);

/// Serde adapter writing booleans as the literal strings `Yes`/`No`
pub mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if *value { "Yes" } else { "No" })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        match value.as_str() {
            "Yes" => Ok(true),
            "No" => Ok(false),
            other => Err(de::Error::custom(format!(
                "expected 'Yes' or 'No', found '{}'",
                other
            ))),
        }
    }
}
