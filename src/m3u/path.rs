//! Lexical path handling for playlist entries
//!
//! Nothing here touches the filesystem: symlinks are not resolved and
//! files are not required to exist.

use std::path::{Component, Path, PathBuf};

/// Collapse `.` and `..` segments and redundant separators
///
/// `..` directly under the root is dropped; leading `..` of a relative
/// path are kept. An empty result becomes `.`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}

/// Normalize a path given as text, returning text
pub fn normalize_str(path: &str) -> String {
    normalize(Path::new(path)).to_string_lossy().into_owned()
}

/// Resolve a playlist entry against the playlist's directory
pub fn resolve(entry: &Path, playlist_dir: &Path) -> PathBuf {
    if entry.is_absolute() {
        normalize(entry)
    } else {
        normalize(&playlist_dir.join(entry))
    }
}

/// Directory a playlist's relative entries are resolved against
pub fn playlist_dir(playlist: &Path) -> PathBuf {
    let absolute = std::path::absolute(playlist).unwrap_or_else(|_| playlist.to_path_buf());
    absolute
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/"))
}

/// Lowercased file name used for filename-only matching
///
/// Uses `Path::file_name`, so a trailing separator is ignored
/// (`/music/a.mp3/` gives `a.mp3`) and a path ending in `..` has no key.
/// Such records are left out of the filename buckets instead of sharing
/// an empty or `..` bucket.
pub fn file_name_key(path: &str) -> Option<String> {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
}

/// Convert a `file://` URI to a local path
pub fn uri_to_path(uri: &str) -> Option<PathBuf> {
    uri.strip_prefix("file://")
        .and_then(|path| urlencoding::decode(path).ok())
        .map(|decoded| PathBuf::from(decoded.into_owned()))
}
