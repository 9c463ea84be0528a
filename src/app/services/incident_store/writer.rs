//! Atomic writers for the enriched table and the quality report
//!
//! Output is staged in a temporary file inside the destination directory and
//! renamed over the target only once fully written, so an interrupted run
//! leaves the previous artifact intact.

use crate::app::models::EnrichedIncident;
use crate::{Error, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Write the enriched table with its fixed header
///
/// The header is written even when there are no records.
pub fn write_enriched_incidents(path: &Path, incidents: &[EnrichedIncident]) -> Result<()> {
    let file_name = path.to_string_lossy().to_string();
    let mut staged = stage_next_to(path)?;

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(staged.as_file_mut());

        writer
            .write_record(EnrichedIncident::column_names())
            .map_err(|e| Error::csv_parsing(&file_name, "Failed to write CSV header", Some(e)))?;

        for incident in incidents {
            writer.serialize(incident).map_err(|e| {
                Error::csv_parsing(&file_name, "Failed to write enriched record", Some(e))
            })?;
        }

        writer
            .flush()
            .map_err(|e| Error::io(format!("Failed to flush {}", file_name), e))?;
    }

    commit(staged, path)?;
    info!(
        "Wrote {} enriched incidents to {}",
        incidents.len(),
        path.display()
    );
    Ok(())
}

/// Write the rendered quality report text
pub fn write_report(path: &Path, report_text: &str) -> Result<()> {
    let mut staged = stage_next_to(path)?;

    staged
        .write_all(report_text.as_bytes())
        .and_then(|_| staged.flush())
        .map_err(|e| Error::io(format!("Failed to write report {}", path.display()), e))?;

    commit(staged, path)?;
    info!("Quality report saved to {}", path.display());
    Ok(())
}

/// Create a temporary file in the directory that will hold `path`
fn stage_next_to(path: &Path) -> Result<NamedTempFile> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(directory).map_err(|e| {
        Error::io(
            format!("Failed to create output directory {}", directory.display()),
            e,
        )
    })?;

    let staged = NamedTempFile::new_in(directory).map_err(|e| {
        Error::io(
            format!("Failed to create temporary file in {}", directory.display()),
            e,
        )
    })?;
    debug!("Staging {} at {}", path.display(), staged.path().display());
    Ok(staged)
}

fn commit(staged: NamedTempFile, path: &Path) -> Result<()> {
    staged
        .as_file()
        .sync_all()
        .map_err(|e| Error::io(format!("Failed to sync {}", path.display()), e))?;
    staged
        .persist(path)
        .map_err(|e| Error::io(format!("Failed to replace {}", path.display()), e.error))?;
    Ok(())
}
