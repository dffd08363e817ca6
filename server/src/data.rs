//! Startup check of the published memory collection.
//!
//! The browser fetches `data/memories.json` directly, so the host does not
//! need the records. Loading them once at startup surfaces a broken data file
//! in the server log instead of only as an empty catalog in a visitor's
//! browser.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use std::path::{Path, PathBuf};

use archive::{ArchiveError, MemoryRecord};

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// Read and decode the memory collection at `path`.
///
/// # Errors
///
/// Returns [`DataError::Io`] if the file cannot be read and
/// [`DataError::Archive`] if its contents do not decode.
pub async fn load_memories(path: &Path) -> Result<Vec<MemoryRecord>, DataError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DataError::Io { path: path.to_path_buf(), source })?;
    Ok(archive::parse_memories(&raw)?)
}

/// Log the outcome of [`load_memories`]. Never fails: the site still serves
/// with a broken data file and the client falls back to an empty catalog.
pub async fn report_memories(path: &Path) -> Option<usize> {
    match load_memories(path).await {
        Ok(records) => {
            let years = archive::distinct_years(&records);
            tracing::info!(
                path = %path.display(),
                count = records.len(),
                first_year = ?years.first(),
                last_year = ?years.last(),
                "memory collection loaded"
            );
            Some(records.len())
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "memory collection unavailable; catalog will be empty");
            None
        }
    }
}
