//! Tests for the incident field parsers


use chrono::NaiveDateTime;

/// Build a timestamp from its string form for tests
pub fn timestamp(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, crate::constants::TIMESTAMP_FORMAT)
        .expect("test timestamp must be valid")
}
