//! JSON archive of sent digests.
//!
//! When an archive directory is configured, every run writes the digest it
//! mailed as a date-named JSON file. The archive is the only durable record
//! of what a digest contained; a failed write is logged by the caller and
//! never fails the run.
//!
//! A rerun on the same date overwrites that date's file, matching the
//! at-least-once semantics of the trigger: the archive records the last
//! digest sent for a date, not every attempt.

use crate::models::Digest;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Write a [`Digest`] to `{archive_dir}/{local_date}.json`.
///
/// Creates the archive directory if needed.
#[instrument(level = "info", skip_all, fields(archive_dir = %archive_dir, date = %digest.local_date))]
pub async fn write_digest(digest: &Digest, archive_dir: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string(digest)?;

    fs::create_dir_all(archive_dir).await?;

    let path = format!(
        "{}/{}.json",
        archive_dir.trim_end_matches('/'),
        digest.local_date
    );
    fs::write(&path, json).await?;
    info!(path = %path, articles = digest.articles.len(), "Archived digest");

    Ok(())
}
