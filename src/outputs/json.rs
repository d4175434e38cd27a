//! JSON snapshot output.
//!
//! The snapshot is the scraper's only product: a single pretty-printed
//! UTF-8 file in the working directory, overwritten on every run. Korean
//! text is written as-is, never `\u`-escaped.

use crate::models::TrendSnapshot;
use std::error::Error;
use tokio::fs;
use tracing::info;

/// Output file name, relative to the working directory.
pub const SNAPSHOT_FILENAME: &str = "humor_trends.json";

/// Serialize a snapshot to the exact on-disk representation
/// (2-space-indented JSON, non-ASCII preserved).
pub fn render(snapshot: &TrendSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}

/// Write the snapshot to [`SNAPSHOT_FILENAME`], replacing any previous run's
/// file.
pub async fn write_snapshot(snapshot: &TrendSnapshot) -> Result<(), Box<dyn Error>> {
    let json = render(snapshot)?;

    info!(
        path = SNAPSHOT_FILENAME,
        items = snapshot.contents.len(),
        "Writing trend snapshot"
    );
    fs::write(SNAPSHOT_FILENAME, json).await?;
    info!(path = SNAPSHOT_FILENAME, "Wrote trend snapshot");

    Ok(())
}
