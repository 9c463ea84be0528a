//! CSV readers for the raw and enriched incident tables

use crate::app::models::{EnrichedIncident, RawIncident};
use crate::{Error, Result};
use csv::StringRecord;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

/// Read the collector's raw incident table
///
/// The header must contain `Datetime`, `Event`, `Location` and `Units`
/// (case-sensitive). Every row must have the header's field count.
pub fn read_raw_incidents(path: &Path) -> Result<Vec<RawIncident>> {
    let incidents: Vec<RawIncident> = read_table(path, crate::constants::columns::RAW)?;
    info!(
        "Read {} raw incidents from {}",
        incidents.len(),
        path.display()
    );
    Ok(incidents)
}

/// Read a previously written enriched incident table
///
/// Stored timestamps are checked so that downstream reporting can rely on
/// them.
pub fn read_enriched_incidents(path: &Path) -> Result<Vec<EnrichedIncident>> {
    let incidents: Vec<EnrichedIncident> = read_table(path, EnrichedIncident::column_names())?;

    for (index, incident) in incidents.iter().enumerate() {
        incident.timestamp().map_err(|e| {
            Error::data_validation(format!(
                "Row {} of {} has an unparseable datetime: {}",
                index + 1,
                path.display(),
                e
            ))
        })?;
    }

    info!(
        "Read {} enriched incidents from {}",
        incidents.len(),
        path.display()
    );
    Ok(incidents)
}

fn read_table<T: DeserializeOwned>(path: &Path, required_columns: &[&str]) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    debug!("Opening incident table: {}", path.display());
    let file_name = path.to_string_lossy().to_string();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| Error::csv_parsing(&file_name, "Failed to open CSV file", Some(e)))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::csv_parsing(&file_name, "Failed to read CSV header", Some(e)))?
        .clone();
    check_columns(&headers, required_columns, &file_name)?;

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<T>().enumerate() {
        let record = result.map_err(|e| {
            Error::csv_parsing(
                &file_name,
                format!("Failed to read data row {}", index + 1),
                Some(e),
            )
        })?;
        records.push(record);
    }

    Ok(records)
}

fn check_columns(headers: &StringRecord, required_columns: &[&str], file_name: &str) -> Result<()> {
    let missing: Vec<&str> = required_columns
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::csv_parsing(
            file_name,
            format!("Missing required columns: {}", missing.join(", ")),
            None,
        ))
    }
}
