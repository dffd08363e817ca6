//! Shared memory-archive model for the memorial site.
//!
//! This crate owns the schema of `data/memories.json`, which is read by the
//! `server` at startup (to report a broken data file early) and fetched by the
//! `client` in the browser. Decoding is all-or-nothing: a document that does
//! not match the schema yields an error and callers fall back to an empty
//! collection rather than rendering half-parsed records.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Error returned by [`parse_memories`].
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The document is not valid JSON or does not match the record schema.
    #[error("failed to decode memory collection: {0}")]
    Decode(#[from] serde_json::Error),
    /// Two records share the same `id`.
    #[error("duplicate memory id: {0}")]
    DuplicateId(i64),
}

/// One personal memory as published in the archive.
///
/// Region and tag codes are kept as raw strings so that codes without a
/// display label still reach the UI unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryRecord {
    pub id: i64,
    pub name: String,
    /// ISO-8601 calendar date (`YYYY-MM-DD`) the memory was documented.
    pub date: String,
    pub year: i32,
    pub region: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub short_text: String,
    pub full_text: String,
    pub image: String,
    #[serde(rename = "ageIn1945")]
    pub age_in_1945: String,
}

impl MemoryRecord {
    /// Whether this record carries the given tag code.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Decode the memory collection, preserving document order.
///
/// # Errors
///
/// Returns [`ArchiveError::Decode`] when the document does not match the
/// schema and [`ArchiveError::DuplicateId`] when an id repeats.
pub fn parse_memories(raw: &str) -> Result<Vec<MemoryRecord>, ArchiveError> {
    let records: Vec<MemoryRecord> = serde_json::from_str(raw)?;
    check_unique_ids(&records)?;
    Ok(records)
}

fn check_unique_ids(records: &[MemoryRecord]) -> Result<(), ArchiveError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(ArchiveError::DuplicateId(record.id));
        }
    }
    Ok(())
}

/// Distinct years present in `records`, ascending.
#[must_use]
pub fn distinct_years(records: &[MemoryRecord]) -> Vec<i32> {
    let mut years: Vec<i32> = records.iter().map(|r| r.year).collect();
    years.sort_unstable();
    years.dedup();
    years
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
