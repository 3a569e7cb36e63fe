//! Data model shared by the playlist parser and the library matcher

mod library;
mod outcome;
mod playlist;
mod track;

pub use library::{Library, LibraryRecord};
pub use outcome::{MatchOutcome, MatchReport, MatchTier};
pub use playlist::{Playlist, PlaylistEntry};
pub use track::TrackReference;
