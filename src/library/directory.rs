//! Library built by walking a music directory

use super::LibrarySource;
use crate::model::{Library, LibraryRecord};
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions treated as audio (compared case-insensitively)
const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "flac", "ogg", "oga", "opus", "m4a", "aac", "wav", "aiff", "aif", "wma", "alac",
];

/// Library backed by the audio files under a directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

impl LibrarySource for DirectorySource {
    fn load(&self) -> Result<Library> {
        if !self.root.is_dir() {
            bail!("Library directory not found: {:?}", self.root);
        }

        log::info!("Scanning {:?} for audio files", self.root);

        let mut paths: Vec<PathBuf> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file() && is_audio_file(entry.path()))
            .map(|entry| entry.into_path())
            .collect();

        paths.sort();

        let library: Library = paths
            .into_iter()
            .map(|path| {
                let filepath = path.to_string_lossy().into_owned();
                let id = format!("{:x}", md5::compute(filepath.as_bytes()));
                LibraryRecord::new(filepath, id)
            })
            .collect();

        log::info!("Found {} audio files", library.record_count());
        Ok(library)
    }

    fn describe(&self) -> String {
        format!("directory {:?}", self.root)
    }
}
