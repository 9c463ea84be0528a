//! Per-record enrichment
//!
//! Combines the units, location and temporal parsers into one enriched record.
//! Records are independent of each other, so this step has no shared state.

use crate::Result;
use crate::app::models::{EnrichedIncident, RawIncident};
use crate::app::services::incident_parser::{
    derive_temporal, parse_incident_timestamp, parse_location, parse_units,
};

/// Enrich a single raw incident
///
/// Fails only when the timestamp does not match the fixed format; the units
/// and location parsers always succeed.
pub fn enrich_incident(incident: &RawIncident) -> Result<EnrichedIncident> {
    let timestamp = parse_incident_timestamp(&incident.datetime)?;

    let units = parse_units(&incident.units);
    let location = parse_location(&incident.location);
    let temporal = derive_temporal(&timestamp);

    Ok(EnrichedIncident {
        datetime: incident.datetime.clone(),
        event: incident.event.clone(),
        location: incident.location.clone(),
        units: incident.units.clone(),

        radio_channel: units.radio_channel,
        units_list: units.units_list,
        unit_count: units.unit_count,

        location_type: location.location_type,
        street_address: location.street_address,
        cross_street: location.cross_street,
        apartment_unit: location.apartment_unit,
        building_name: location.building_name,

        year: temporal.year,
        month: temporal.month,
        day: temporal.day,
        day_of_week: temporal.day_of_week,
        hour: temporal.hour,
        time_period: temporal.time_period,
        is_weekend: temporal.is_weekend,
        season: temporal.season,
        week_of_year: temporal.week_of_year,
    })
}
