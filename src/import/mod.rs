//! Import orchestration: playlist files in, resolved playlists out

pub mod config;
pub mod pipeline;

pub use config::ImportConfig;
pub use pipeline::{ImportPipeline, PlaylistImport};
