//! Lookup tables built from one library snapshot

use crate::m3u::path::{file_name_key, normalize_str};
use crate::model::LibraryRecord;
use std::collections::HashMap;

/// Path and filename lookups over a library snapshot
///
/// Path collisions are last-write-wins. Filename collisions accumulate so an
/// ambiguous filename can be told apart from a unique one.
#[derive(Debug, Default)]
pub(crate) struct MatchIndex {
    exact: HashMap<String, String>,
    lower: HashMap<String, String>,
    by_filename: HashMap<String, Vec<String>>,
}

impl MatchIndex {
    pub(crate) fn build(records: &[LibraryRecord]) -> Self {
        let mut index = Self::default();
        let mut skipped = 0usize;

        for record in records {
            if !record.is_indexable() {
                skipped += 1;
                continue;
            }

            let normalized = normalize_str(&record.filepath);
            index
                .lower
                .insert(normalized.to_lowercase(), record.id.clone());
            index.exact.insert(normalized, record.id.clone());

            if let Some(name) = file_name_key(&record.filepath) {
                // Every record counts, even one repeating an ID already in the bucket
                index
                    .by_filename
                    .entry(name)
                    .or_default()
                    .push(record.id.clone());
            }
        }

        log::debug!(
            "Indexed {} library paths ({} file names, {} records skipped)",
            index.path_count(),
            index.by_filename.len(),
            skipped
        );

        index
    }

    pub(crate) fn exact(&self, normalized: &str) -> Option<&str> {
        self.exact.get(normalized).map(String::as_str)
    }

    pub(crate) fn case_insensitive(&self, normalized: &str) -> Option<&str> {
        self.lower.get(&normalized.to_lowercase()).map(String::as_str)
    }

    /// The single ID carrying this file name, or `None` if absent or ambiguous
    pub(crate) fn unique_filename(&self, path: &str) -> Option<&str> {
        let name = file_name_key(path)?;
        match self.by_filename.get(&name).map(Vec::as_slice) {
            Some([id]) => Some(id.as_str()),
            Some(ids) if ids.len() > 1 => {
                log::debug!("File name {:?} is ambiguous ({} tracks)", name, ids.len());
                None
            }
            _ => None,
        }
    }

    pub(crate) fn path_count(&self) -> usize {
        self.exact.len()
    }
}
