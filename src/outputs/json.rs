//! JSON output generation for scraped records.
//!
//! Records are written under a date directory named for the run's
//! `last_modified` stamp, one file per run:
//! `{output_dir}/{YYYY-MM-DD}/{HH-MM-SS}.json`.

use crate::models::ScrapeRecord;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`ScrapeRecord`] to a JSON file with date-based directory structure.
///
/// # Returns
///
/// The path of the written file, or an error if directory creation or
/// file writing fails.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir))]
pub async fn write_record(
    record: &ScrapeRecord,
    output_dir: &str,
) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(record)?;

    let day_dir = format!("{}/{}", output_dir, record.last_modified.date_naive());
    if let Err(e) = fs::create_dir_all(&day_dir).await {
        error!(%day_dir, error = %e, "Failed to create output dir");
        return Err(e.into());
    }

    let path = format!("{}/{}.json", day_dir, record.last_modified.format("%H-%M-%S"));
    info!(path = %path, "Writing JSON");
    fs::write(&path, json).await?;
    info!(path = %path, "Wrote scrape record");

    Ok(path)
}
