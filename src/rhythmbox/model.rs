//! Internal Rhythmbox data structures for XML parsing

use crate::m3u::path::uri_to_path;
use std::path::PathBuf;

/// Rhythmbox song entry (as stored in rhythmdb.xml)
#[derive(Debug, Clone, Default)]
pub struct RhythmboxEntry {
    pub title: Option<String>,
    pub location: Option<String>, // file:// URI
}

impl RhythmboxEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Local path of the entry, if its location is a file:// URI
    pub fn get_file_path(&self) -> Option<PathBuf> {
        self.location.as_deref().and_then(uri_to_path)
    }
}
