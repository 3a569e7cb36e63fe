use super::MatchReport;
use serde::{Deserialize, Serialize};

/// A playlist resolved against the library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name
    pub name: String,

    /// Playlist entries (ordered)
    pub entries: Vec<PlaylistEntry>,
}

/// Entry in a playlist, referencing a library record by ID
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Track ID (references LibraryRecord::id)
    pub track_id: String,

    /// Position in playlist (0-based)
    pub position: u32,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    /// Build a playlist from the matched entries of a report, in playlist order
    pub fn from_report(name: String, report: &MatchReport) -> Self {
        let mut playlist = Self::new(name);
        for id in report.matched_ids() {
            playlist.add_track(id.to_string());
        }
        playlist
    }

    /// Add a track to this playlist
    pub fn add_track(&mut self, track_id: String) {
        let position = self.entries.len() as u32;
        self.entries.push(PlaylistEntry { track_id, position });
    }

    /// Number of tracks in this playlist
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MatchOutcome, MatchTier};
    use std::path::PathBuf;

    #[test]
    fn test_from_report_skips_unmatched() {
        let report = MatchReport::new(vec![
            MatchOutcome::Matched {
                id: "7".to_string(),
                tier: MatchTier::ExactPath,
            },
            MatchOutcome::Unmatched {
                path: PathBuf::from("/gone.mp3"),
            },
            MatchOutcome::Matched {
                id: "3".to_string(),
                tier: MatchTier::Filename,
            },
        ]);

        let playlist = Playlist::from_report("Road Trip".to_string(), &report);

        assert_eq!(playlist.name, "Road Trip");
        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.entries[0].track_id, "7");
        assert_eq!(playlist.entries[0].position, 0);
        assert_eq!(playlist.entries[1].track_id, "3");
        assert_eq!(playlist.entries[1].position, 1);
    }

    #[test]
    fn test_empty_playlist() {
        let playlist = Playlist::new("Empty".to_string());
        assert!(playlist.is_empty());
    }
}
