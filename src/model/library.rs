use serde::{Deserialize, Serialize};

/// One entry of the media library the playlist is matched against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryRecord {
    /// Path of the audio file as the library knows it
    pub filepath: String,

    /// Stable identifier of the track
    pub id: String,
}

impl LibraryRecord {
    pub fn new(filepath: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            filepath: filepath.into(),
            id: id.into(),
        }
    }

    /// Records without a path or an id can't be matched and are skipped
    pub fn is_indexable(&self) -> bool {
        !self.filepath.is_empty() && !self.id.is_empty()
    }
}

/// Snapshot of a media library
///
/// Records keep their insertion order: when two records normalize to the
/// same path, the later one wins during matching.
#[derive(Debug, Clone, Default)]
pub struct Library {
    records: Vec<LibraryRecord>,
}

impl Library {
    /// All records in insertion order
    pub fn records(&self) -> &[LibraryRecord] {
        &self.records
    }

    /// Total number of records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<LibraryRecord> for Library {
    fn from_iter<I: IntoIterator<Item = LibraryRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
