//! Import pipeline orchestration

use super::config::ImportConfig;
use crate::library::LibrarySource;
use crate::m3u::PlaylistParser;
use crate::matcher::LibraryMatcher;
use crate::model::{Library, MatchReport, MatchTier, Playlist, TrackReference};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Outcome of importing one playlist file
#[derive(Debug, Clone)]
pub struct PlaylistImport {
    /// Playlist file that was read
    pub source: PathBuf,

    /// Entries as parsed from the file
    pub tracks: Vec<TrackReference>,

    /// Per-entry match outcomes
    pub report: MatchReport,

    /// Matched tracks as a named playlist
    pub playlist: Playlist,
}

/// Parses playlist files and matches them against one library snapshot
pub struct ImportPipeline {
    config: ImportConfig,
    parser: PlaylistParser,
    library: Library,
    matcher: LibraryMatcher,
}

impl ImportPipeline {
    /// Load the library from a source and index it
    pub fn new<S: LibrarySource>(config: ImportConfig, source: &S) -> Result<Self> {
        log::info!("Loading library from {}", source.describe());
        let library = source
            .load()
            .with_context(|| format!("Failed to load library from {}", source.describe()))?;

        Ok(Self::with_library(config, library))
    }

    /// Use an already loaded library
    pub fn with_library(config: ImportConfig, library: Library) -> Self {
        let parser = config.parser();
        let matcher = LibraryMatcher::new(library.records());

        Self {
            config,
            parser,
            library,
            matcher,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Parse and match a single playlist file
    pub fn import(&self, playlist_path: &Path) -> PlaylistImport {
        let tracks = self.parser.parse(playlist_path);
        let report = self.matcher.match_outcomes(&tracks);
        let playlist = Playlist::from_report(playlist_name(playlist_path), &report);

        log::info!(
            "{:?}: {} entries, {} matched ({} exact, {} case-insensitive, {} by filename), {} unmatched",
            playlist_path,
            tracks.len(),
            report.matched_count(),
            report.tier_count(MatchTier::ExactPath),
            report.tier_count(MatchTier::CaseInsensitivePath),
            report.tier_count(MatchTier::Filename),
            report.unmatched_count()
        );

        PlaylistImport {
            source: playlist_path.to_path_buf(),
            tracks,
            report,
            playlist,
        }
    }

    /// Import several playlist files, dropping empty results unless configured otherwise
    pub fn import_all(&self, playlist_paths: &[PathBuf]) -> Vec<PlaylistImport> {
        let mut imports = Vec::new();

        for path in playlist_paths {
            let import = self.import(path);
            if import.playlist.is_empty() && !self.config.keep_empty {
                log::debug!("Skipping empty playlist: {}", import.playlist.name);
                continue;
            }
            imports.push(import);
        }

        imports
    }
}

/// Playlist name derived from the file stem
pub fn playlist_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| String::from("Unnamed"))
}
