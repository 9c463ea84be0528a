//! Units field decoding
//!
//! The Units column is one of three shapes, tried in order:
//! `Radio: 9C Units: E1, T1`, `Units: E1, T1`, or arbitrary text.

use crate::constants::{RADIO_UNITS_PATTERN, UNITS_ONLY_PATTERN};
use regex::Regex;
use std::sync::LazyLock;

static RADIO_UNITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RADIO_UNITS_PATTERN).expect("radio/units pattern is valid"));

static UNITS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UNITS_ONLY_PATTERN).expect("units pattern is valid"));

/// Which notation the units text matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitsNotation {
    /// `Radio: <channel> Units: <list>`
    RadioAndUnits,
    /// `Units: <list>`
    UnitsOnly,
    /// Neither prefix; the whole text is the unit list
    Freeform,
}

/// Structured result of decoding a Units field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUnits {
    pub notation: UnitsNotation,
    /// Radio channel, empty unless the radio notation matched
    pub radio_channel: String,
    /// Trimmed unit list with the prefix removed
    pub units_list: String,
    /// Number of comma-separated tokens in `units_list`, at least 1
    pub unit_count: usize,
}

/// Decode a raw Units field
///
/// Never fails. An empty unit list still counts as one unit, matching the
/// numbers the historical dataset was built with.
///
/// # Examples
///
/// ```rust
/// use incident_processor::app::services::incident_parser::{UnitsNotation, parse_units};
///
/// let parsed = parse_units("Units: E1");
/// assert_eq!(parsed.notation, UnitsNotation::UnitsOnly);
/// assert_eq!(parsed.radio_channel, "");
/// assert_eq!(parsed.units_list, "E1");
/// assert_eq!(parsed.unit_count, 1);
/// ```
pub fn parse_units(raw: &str) -> ParsedUnits {
    let (notation, radio_channel, units_list) = match_notation(raw);
    let units_list = units_list.trim();

    ParsedUnits {
        notation,
        radio_channel: radio_channel.to_string(),
        units_list: units_list.to_string(),
        unit_count: count_units(units_list),
    }
}

fn match_notation(raw: &str) -> (UnitsNotation, &str, &str) {
    if let Some(caps) = RADIO_UNITS.captures(raw) {
        if let (Some(channel), Some(list)) = (caps.get(1), caps.get(2)) {
            return (UnitsNotation::RadioAndUnits, channel.as_str(), list.as_str());
        }
    }

    if let Some(list) = UNITS_ONLY.captures(raw).and_then(|caps| caps.get(1)) {
        return (UnitsNotation::UnitsOnly, "", list.as_str());
    }

    (UnitsNotation::Freeform, "", raw)
}

/// Count comma-separated unit tokens; an empty list yields 1
pub fn count_units(units_list: &str) -> usize {
    units_list.split(',').count()
}
