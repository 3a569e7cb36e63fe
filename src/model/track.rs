use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single entry read from an M3U playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackReference {
    /// Absolute, lexically normalized path to the media file
    pub path: PathBuf,

    /// Title from the preceding `#EXTINF` directive (empty if none)
    pub title: String,

    /// Duration in whole seconds from the preceding `#EXTINF` directive (0 if none)
    pub duration: u64,
}

impl TrackReference {
    /// Create a reference with no metadata attached
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            title: String::new(),
            duration: 0,
        }
    }

    /// Attach a title and duration
    pub fn with_info(mut self, title: impl Into<String>, duration: u64) -> Self {
        self.title = title.into();
        self.duration = duration;
        self
    }
}
