//! Location field decoding
//!
//! Location text looks like one of:
//!
//! ```text
//! MAIN ST / 2ND ST
//! 100 BLOCK OF MAIN ST, Apt/Unit:4B, Oakview Apts
//! 2400 OAK AVE, Riverside Elementary
//! ```
//!
//! The first comma-separated part is the street portion; trailing parts name
//! the building or landmark.

use crate::app::models::LocationType;
use crate::constants::{APARTMENT_SEGMENT_PATTERN, BLOCK_MARKER, INTERSECTION_SEPARATOR};
use regex::Regex;
use std::sync::LazyLock;

static APARTMENT_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(APARTMENT_SEGMENT_PATTERN).expect("apartment segment pattern is valid")
});

/// Structured result of decoding a Location field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLocation {
    pub location_type: LocationType,
    pub street_address: String,
    /// Second street of an intersection, empty otherwise
    pub cross_street: String,
    pub apartment_unit: String,
    pub building_name: String,
    /// The untouched input, kept for auditing
    pub full_location: String,
}

/// Decode a raw Location field
///
/// Never fails and has no locale or clock dependence: the same input always
/// produces the same output.
///
/// # Examples
///
/// ```rust
/// use incident_processor::LocationType;
/// use incident_processor::app::services::incident_parser::parse_location;
///
/// let parsed = parse_location("100 BLOCK OF MAIN ST, Apt/Unit:4B, Oakview Apts");
/// assert_eq!(parsed.location_type, LocationType::Block);
/// assert_eq!(parsed.apartment_unit, "4B");
/// assert_eq!(parsed.building_name, "Oakview Apts");
/// ```
pub fn parse_location(raw: &str) -> ParsedLocation {
    let (apartment_unit, remainder) = extract_apartment(raw);

    let parts: Vec<&str> = remainder.split(',').map(str::trim).collect();
    let street_part = parts.first().copied().unwrap_or_default();

    let (location_type, street_address, cross_street) = classify_street(street_part);

    let building_name = if parts.len() > 1 {
        parts[1..].join(", ")
    } else {
        String::new()
    };

    ParsedLocation {
        location_type,
        street_address,
        cross_street,
        apartment_unit,
        building_name,
        full_location: raw.to_string(),
    }
}

/// Pull the first `, Apt/Unit:<value>` segment out of the text
///
/// Returns the trimmed value (empty when absent) and the text with every such
/// segment removed.
fn extract_apartment(raw: &str) -> (String, String) {
    match APARTMENT_SEGMENT.captures(raw).and_then(|caps| caps.get(1)) {
        Some(value) => {
            let apartment = value.as_str().trim().to_string();
            let remainder = APARTMENT_SEGMENT.replace_all(raw, "").into_owned();
            (apartment, remainder)
        }
        None => (String::new(), raw.to_string()),
    }
}

/// Classify the street portion of a location
///
/// Returns (type, street address, cross street).
pub fn classify_street(street_part: &str) -> (LocationType, String, String) {
    if street_part.contains(INTERSECTION_SEPARATOR) {
        let mut streets = street_part.split(INTERSECTION_SEPARATOR);
        let street = streets.next().unwrap_or_default().trim().to_string();
        let cross = streets.next().unwrap_or_default().trim().to_string();
        return (LocationType::Intersection, street, cross);
    }

    let location_type = if street_part.to_uppercase().contains(BLOCK_MARKER) {
        LocationType::Block
    } else {
        LocationType::Address
    };

    (location_type, street_part.to_string(), String::new())
}
