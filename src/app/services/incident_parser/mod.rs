//! Field parsers for the free-text incident columns
//!
//! The dispatch feed encodes two small notations inside plain text columns.
//! This module decodes them, plus the record timestamp, into structured fields.
//! Every parser here is total: unrecognised input falls through to a
//! low-information result instead of an error, so one odd record never stops a
//! run. The only fallible entry point is [`parse_incident_timestamp`], whose
//! failures the record processor counts and skips.
//!
//! ## Architecture
//!
//! - [`units`] - `Radio: <chan> Units: <list>` notation
//! - [`location`] - intersection / block / address notation with optional
//!   apartment and building segments
//! - [`temporal`] - timestamp parsing and calendar attribute derivation
//!
//! ## Usage
//!
//! ```rust
//! use incident_processor::app::services::incident_parser::{parse_location, parse_units};
//!
//! let units = parse_units("Radio: 9C Units: E1, T1, M1");
//! assert_eq!(units.radio_channel, "9C");
//! assert_eq!(units.unit_count, 3);
//!
//! let location = parse_location("MAIN ST / 2ND ST");
//! assert_eq!(location.cross_street, "2ND ST");
//! ```

pub mod location;
pub mod temporal;
pub mod units;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use location::{ParsedLocation, parse_location};
pub use temporal::{TemporalFields, derive_temporal, parse_incident_timestamp};
pub use units::{ParsedUnits, UnitsNotation, parse_units};
