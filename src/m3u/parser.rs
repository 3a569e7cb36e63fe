//! Line-level M3U parsing

use super::path;
use super::ExtInfError;
use crate::model::TrackReference;
use std::path::{Path, PathBuf};

const HEADER_MARKER: &str = "#EXTM3U";
const EXTINF_MARKER: &str = "#EXTINF:";
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Title/duration from the last `#EXTINF`, waiting for its path line
#[derive(Debug, Default)]
struct PendingMetadata {
    title: Option<String>,
    duration: Option<u64>,
}

impl PendingMetadata {
    /// Apply `<duration>[,<title>]`
    ///
    /// The duration is stored before the title is looked at, so a bad
    /// duration leaves the title untouched.
    fn apply(&mut self, info: &str) -> Result<(), ExtInfError> {
        match info.split_once(',') {
            Some((duration, title)) => {
                self.duration = Some(parse_duration(duration)?);
                self.title = Some(title.trim().to_string());
            }
            None => {
                self.duration = Some(parse_duration(info)?);
            }
        }
        Ok(())
    }

    /// Hand the pending values to a track and start over
    fn consume(&mut self, path: PathBuf) -> TrackReference {
        let pending = std::mem::take(self);
        TrackReference::new(path)
            .with_info(pending.title.unwrap_or_default(), pending.duration.unwrap_or(0))
    }
}

/// Seconds as a float, truncated toward zero; negatives clamp to 0
fn parse_duration(text: &str) -> Result<u64, ExtInfError> {
    let trimmed = text.trim();
    let seconds: f64 = trimmed
        .parse()
        .map_err(|_| ExtInfError::InvalidDuration(trimmed.to_string()))?;

    if !seconds.is_finite() || seconds >= u64::MAX as f64 {
        return Err(ExtInfError::InvalidDuration(trimmed.to_string()));
    }

    // `as` saturates negatives to 0
    Ok(seconds.trunc() as u64)
}

/// Parse decoded playlist text
///
/// Relative entries are resolved against `playlist_dir`. Lines written as
/// `file://` URIs are decoded to paths when `decode_file_uris` is set.
pub(crate) fn parse_lines(
    content: &str,
    playlist_dir: &Path,
    decode_file_uris: bool,
) -> Vec<TrackReference> {
    let mut tracks = Vec::new();
    let mut pending = PendingMetadata::default();

    for raw in content.split(['\r', '\n']) {
        let line = raw.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);

        if line.is_empty() || line.starts_with(HEADER_MARKER) {
            continue;
        }

        if let Some(info) = line.strip_prefix(EXTINF_MARKER) {
            if let Err(e) = pending.apply(info) {
                log::debug!("Ignoring malformed directive {:?}: {}", line, e);
            }
            continue;
        }

        if line.starts_with('#') {
            continue;
        }

        let entry = if decode_file_uris {
            path::uri_to_path(line).unwrap_or_else(|| PathBuf::from(line))
        } else {
            PathBuf::from(line)
        };

        tracks.push(pending.consume(path::resolve(&entry, playlist_dir)));
    }

    if pending.title.is_some() || pending.duration.is_some() {
        log::debug!("Discarding trailing #EXTINF with no path line");
    }

    tracks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<TrackReference> {
        parse_lines(content, Path::new("/music"), true)
    }

    #[test]
    fn test_extinf_then_path() {
        let tracks = parse("#EXTM3U\n#EXTINF:123,My Title\n/music/a.mp3\n");
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].duration, 123);
        assert_eq!(tracks[0].title, "My Title");
        assert_eq!(tracks[0].path, PathBuf::from("/music/a.mp3"));
    }

    #[test]
    fn test_path_without_extinf() {
        let tracks = parse("/music/a.mp3\n/music/b.mp3\n");
        assert_eq!(tracks.len(), 2);
        assert!(tracks.iter().all(|t| t.title.is_empty() && t.duration == 0));
    }

    #[test]
    fn test_duration_truncates() {
        let tracks = parse("#EXTINF:90.7,X\na.mp3");
        assert_eq!(tracks[0].duration, 90);
        assert_eq!(tracks[0].title, "X");
    }

    #[test]
    fn test_duration_only() {
        let tracks = parse("#EXTINF:42\na.mp3");
        assert_eq!(tracks[0].duration, 42);
        assert_eq!(tracks[0].title, "");
    }

    #[test]
    fn test_title_keeps_later_commas() {
        let tracks = parse("#EXTINF:10, Crosby, Stills & Nash - Wooden Ships \na.mp3");
        assert_eq!(tracks[0].title, "Crosby, Stills & Nash - Wooden Ships");
    }

    #[test]
    fn test_bad_duration_leaves_title_unset() {
        let tracks = parse("#EXTINF:abc,Title\na.mp3");
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].duration, 0);
        assert_eq!(tracks[0].title, "");
    }

    #[test]
    fn test_bad_directive_keeps_earlier_values() {
        let tracks = parse("#EXTINF:30,Kept\n#EXTINF:oops\na.mp3");
        assert_eq!(tracks[0].duration, 30);
        assert_eq!(tracks[0].title, "Kept");
    }

    #[test]
    fn test_negative_and_non_finite_durations() {
        let tracks = parse("#EXTINF:-1,Radio\na.mp3\n#EXTINF:inf,Forever\nb.mp3");
        assert_eq!(tracks[0].duration, 0);
        assert_eq!(tracks[0].title, "Radio");
        assert_eq!(tracks[1].duration, 0);
        assert_eq!(tracks[1].title, "");
    }

    #[test]
    fn test_long_duration_is_not_capped() {
        let tracks = parse("#EXTINF:5000000000,Long\na.mp3\n#EXTINF:1e30,Huge\nb.mp3");
        assert_eq!(tracks[0].duration, 5_000_000_000);
        assert_eq!(tracks[0].title, "Long");
        assert_eq!(tracks[1].duration, 0);
        assert_eq!(tracks[1].title, "");
    }

    #[test]
    fn test_pending_resets_after_each_track() {
        let tracks = parse("#EXTINF:5,First\na.mp3\nb.mp3");
        assert_eq!(tracks[0].title, "First");
        assert_eq!(tracks[1].title, "");
        assert_eq!(tracks[1].duration, 0);
    }

    #[test]
    fn test_trailing_extinf_is_dropped() {
        let tracks = parse("a.mp3\n#EXTINF:5,Orphan\n");
        assert_eq!(tracks.len(), 1);
    }

    #[test]
    fn test_blank_lines_and_comments_keep_pending() {
        let tracks = parse("#EXTINF:7,Seven\n\n   \n#EXTGRP:Rock\n# note\na.mp3");
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "Seven");
        assert_eq!(tracks[0].duration, 7);
    }

    #[test]
    fn test_relative_paths_resolve_against_dir() {
        let tracks = parse("songs/a.mp3\n./b.mp3\n../c.mp3");
        assert_eq!(tracks[0].path, PathBuf::from("/music/songs/a.mp3"));
        assert_eq!(tracks[1].path, PathBuf::from("/music/b.mp3"));
        assert_eq!(tracks[2].path, PathBuf::from("/c.mp3"));
    }

    #[test]
    fn test_line_endings() {
        let tracks = parse("#EXTM3U\r\n#EXTINF:1,A\r\na.mp3\rb.mp3\r\n");
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].title, "A");
        assert_eq!(tracks[1].path, PathBuf::from("/music/b.mp3"));
    }

    #[test]
    fn test_bom_before_header() {
        let tracks = parse("\u{FEFF}#EXTM3U\na.mp3");
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].path, PathBuf::from("/music/a.mp3"));
    }

    #[test]
    fn test_file_uri_lines() {
        let tracks = parse("file:///srv/My%20Song.mp3");
        assert_eq!(tracks[0].path, PathBuf::from("/srv/My Song.mp3"));

        let raw = parse_lines("file:///srv/My%20Song.mp3", Path::new("/music"), false);
        assert_eq!(raw[0].path, PathBuf::from("/music/file:/srv/My%20Song.mp3"));
    }
}
