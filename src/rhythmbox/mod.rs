//! Rhythmbox library reader
//!
//! Reads Rhythmbox's XML database so playlists can be matched against a
//! user's existing Rhythmbox collection.

mod database;
mod model;

pub use database::parse_database;

use crate::library::LibrarySource;
use crate::model::Library;
use anyhow::Result;
use std::path::PathBuf;

/// Library backed by a Rhythmbox rhythmdb.xml
#[derive(Debug, Clone)]
pub struct RhythmboxSource {
    db_path: PathBuf,
}

impl RhythmboxSource {
    /// # Arguments
    /// * `db_path` - Path to rhythmdb.xml (typically ~/.local/share/rhythmbox/rhythmdb.xml)
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl LibrarySource for RhythmboxSource {
    fn load(&self) -> Result<Library> {
        log::info!("Parsing Rhythmbox database from {:?}", self.db_path);
        let records = parse_database(&self.db_path)?;
        Ok(records.into_iter().collect())
    }

    fn describe(&self) -> String {
        format!("Rhythmbox database {:?}", self.db_path)
    }
}
