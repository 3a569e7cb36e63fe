//! Import configuration

use crate::m3u::{PlaylistEncoding, PlaylistParser, DEFAULT_ENCODINGS};

/// Configuration for the import process
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Text encodings tried, in order, when decoding a playlist
    pub encodings: Vec<PlaylistEncoding>,

    /// Whether `file://` URI lines are decoded to local paths
    pub decode_file_uris: bool,

    /// Keep playlists in the result even when nothing matched
    pub keep_empty: bool,
}

impl ImportConfig {
    /// Create a new import configuration with the default encoding chain
    pub fn new() -> Self {
        Self {
            encodings: DEFAULT_ENCODINGS.to_vec(),
            decode_file_uris: true,
            keep_empty: false,
        }
    }

    /// Set the encoding fallback chain
    pub fn with_encodings(mut self, encodings: Vec<PlaylistEncoding>) -> Self {
        self.encodings = encodings;
        self
    }

    /// Enable or disable `file://` decoding
    pub fn with_file_uris(mut self, enabled: bool) -> Self {
        self.decode_file_uris = enabled;
        self
    }

    /// Keep playlists that end up with no matched tracks
    pub fn with_keep_empty(mut self, keep: bool) -> Self {
        self.keep_empty = keep;
        self
    }

    /// Build a parser from this configuration
    pub fn parser(&self) -> PlaylistParser {
        PlaylistParser::new()
            .with_encodings(self.encodings.clone())
            .with_file_uris(self.decode_file_uris)
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self::new()
    }
}
