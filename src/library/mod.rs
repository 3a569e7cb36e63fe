//! Library providers
//!
//! The matcher only needs an ordered list of `(filepath, id)` records. These
//! sources build one from somewhere a user's collection already lives.

mod directory;

pub use directory::DirectorySource;

use crate::model::Library;
use anyhow::Result;

/// Anything that can produce a library snapshot to match playlists against
pub trait LibrarySource {
    /// Load the current snapshot
    fn load(&self) -> Result<Library>;

    /// Short description for log output
    fn describe(&self) -> String;
}
