//! M3U / M3U8 playlist parsing
//!
//! Reads a playlist of unknown encoding and turns it into an ordered list of
//! [`TrackReference`]s. Parsing is best effort: an unreadable or undecodable
//! file yields no tracks, and malformed `#EXTINF` directives are skipped.

mod encoding;
mod parser;
pub mod path;

pub use encoding::{decode_with_fallback, PlaylistEncoding, DEFAULT_ENCODINGS};

use crate::model::TrackReference;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to turn a playlist file into text
#[derive(Debug, Error)]
pub enum PlaylistError {
    #[error("failed to read playlist {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("playlist {path:?} is not valid in any of: {tried}")]
    Undecodable { path: PathBuf, tried: String },
}

/// Malformed `#EXTINF` directive
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtInfError {
    #[error("invalid duration {0:?}")]
    InvalidDuration(String),
}

/// Playlist parser with a configurable encoding fallback chain
#[derive(Debug, Clone)]
pub struct PlaylistParser {
    encodings: Vec<PlaylistEncoding>,
    decode_file_uris: bool,
}

impl Default for PlaylistParser {
    fn default() -> Self {
        Self {
            encodings: DEFAULT_ENCODINGS.to_vec(),
            decode_file_uris: true,
        }
    }
}

impl PlaylistParser {
    /// Create a parser with the default encoding chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the encoding candidates (tried in the given order)
    pub fn with_encodings(mut self, encodings: Vec<PlaylistEncoding>) -> Self {
        self.encodings = encodings;
        self
    }

    /// Toggle decoding of `file://` URI lines
    pub fn with_file_uris(mut self, enabled: bool) -> Self {
        self.decode_file_uris = enabled;
        self
    }

    /// Parse a playlist file
    ///
    /// Never fails: a file that can't be read or decoded yields an empty list.
    pub fn parse(&self, playlist: &Path) -> Vec<TrackReference> {
        match self.read_playlist(playlist) {
            Ok(content) => {
                let tracks = self.parse_str(&content, &path::playlist_dir(playlist));
                log::debug!("Parsed {} entries from {:?}", tracks.len(), playlist);
                tracks
            }
            Err(e) => {
                log::warn!("{}", e);
                Vec::new()
            }
        }
    }

    /// Parse already-decoded playlist text
    pub fn parse_str(&self, content: &str, playlist_dir: &Path) -> Vec<TrackReference> {
        parser::parse_lines(content, playlist_dir, self.decode_file_uris)
    }

    /// Read and decode a playlist file with the first encoding that fits
    pub fn read_playlist(&self, playlist: &Path) -> Result<String, PlaylistError> {
        let bytes = std::fs::read(playlist).map_err(|source| PlaylistError::Io {
            path: playlist.to_path_buf(),
            source,
        })?;

        match decode_with_fallback(&bytes, &self.encodings) {
            Some((content, encoding)) => {
                log::debug!("Decoded {:?} as {}", playlist, encoding);
                Ok(content)
            }
            None => Err(PlaylistError::Undecodable {
                path: playlist.to_path_buf(),
                tried: self
                    .encodings
                    .iter()
                    .map(PlaylistEncoding::label)
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

/// Parse a playlist file with the default settings
pub fn parse(playlist: &Path) -> Vec<TrackReference> {
    PlaylistParser::default().parse(playlist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_file_resolves_against_playlist_dir() {
        let temp_dir = TempDir::new().unwrap();
        let playlist = temp_dir.path().join("list.m3u8");
        fs::write(&playlist, "#EXTM3U\n#EXTINF:200,Song\nsongs/a.mp3\n").unwrap();

        let tracks = parse(&playlist);

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].path, temp_dir.path().join("songs").join("a.mp3"));
        assert_eq!(tracks[0].title, "Song");
        assert_eq!(tracks[0].duration, 200);
    }

    #[test]
    fn test_parse_latin1_file() {
        let temp_dir = TempDir::new().unwrap();
        let playlist = temp_dir.path().join("old.m3u");
        let mut bytes = b"#EXTINF:60,Bj".to_vec();
        bytes.push(0xF6);
        bytes.extend_from_slice(b"rk\n/music/bjork.mp3\n");
        fs::write(&playlist, bytes).unwrap();

        let tracks = parse(&playlist);

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "Björk");
    }

    #[test]
    fn test_missing_file_yields_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(parse(&temp_dir.path().join("nope.m3u")).is_empty());
    }

    #[test]
    fn test_undecodable_file_yields_empty() {
        let temp_dir = TempDir::new().unwrap();
        let playlist = temp_dir.path().join("bad.m3u");
        fs::write(&playlist, [0xFFu8, 0xFE, 0x80, 0x2F, 0x61]).unwrap();

        let parser = PlaylistParser::new()
            .with_encodings(vec![PlaylistEncoding::Utf8, PlaylistEncoding::Utf8Sig]);

        assert!(parser.parse(&playlist).is_empty());
        assert!(matches!(
            parser.read_playlist(&playlist),
            Err(PlaylistError::Undecodable { .. })
        ));
    }

    #[test]
    fn test_read_error_is_io() {
        let temp_dir = TempDir::new().unwrap();
        let err = PlaylistParser::new()
            .read_playlist(&temp_dir.path().join("missing.m3u"))
            .unwrap_err();
        assert!(matches!(err, PlaylistError::Io { .. }));
    }
}
