//! Playlist Import - M3U/M3U8 playlists matched against a media library
//!
//! This library parses M3U playlists of unknown encoding into ordered track
//! references and resolves them against an existing library by path or,
//! failing that, by an unambiguous file name.

pub mod import;
pub mod library;
pub mod m3u;
pub mod matcher;
pub mod model;
pub mod rhythmbox;

pub use import::{ImportConfig, ImportPipeline};
pub use m3u::{parse, PlaylistParser};
pub use matcher::{match_tracks, LibraryMatcher};
