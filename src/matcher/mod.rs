//! Matching playlist entries against a library snapshot
//!
//! Each entry is resolved by the first tier that succeeds:
//! 1. exact normalized path
//! 2. normalized path ignoring case
//! 3. file name ignoring case, only when exactly one library track has it
//!
//! Anything else is reported as unmatched with its original path.

mod index;

use crate::m3u::path::normalize_str;
use crate::model::{LibraryRecord, MatchOutcome, MatchReport, MatchTier, TrackReference};
use index::MatchIndex;
use std::path::PathBuf;

/// Resolves playlist entries against one library snapshot
#[derive(Debug)]
pub struct LibraryMatcher {
    index: MatchIndex,
}

impl LibraryMatcher {
    /// Index a library snapshot
    ///
    /// Records with an empty path or ID are skipped.
    pub fn new(records: &[LibraryRecord]) -> Self {
        Self {
            index: MatchIndex::build(records),
        }
    }

    /// Resolve one playlist entry
    pub fn resolve(&self, track: &TrackReference) -> MatchOutcome {
        let original = track.path.to_string_lossy();
        let normalized = normalize_str(&original);

        let found = self
            .index
            .exact(&normalized)
            .map(|id| (id, MatchTier::ExactPath))
            .or_else(|| {
                self.index
                    .case_insensitive(&normalized)
                    .map(|id| (id, MatchTier::CaseInsensitivePath))
            })
            .or_else(|| {
                self.index
                    .unique_filename(&original)
                    .map(|id| (id, MatchTier::Filename))
            });

        match found {
            Some((id, tier)) => {
                log::debug!("Matched {:?} -> {} ({})", track.path, id, tier.name());
                MatchOutcome::Matched {
                    id: id.to_string(),
                    tier,
                }
            }
            None => {
                log::debug!("No library match for {:?}", track.path);
                MatchOutcome::Unmatched {
                    path: track.path.clone(),
                }
            }
        }
    }

    /// Resolve every entry, one tagged outcome per entry in playlist order
    pub fn match_outcomes(&self, tracks: &[TrackReference]) -> MatchReport {
        MatchReport::new(tracks.iter().map(|track| self.resolve(track)).collect())
    }
}

/// Match playlist entries against a library
///
/// Returns `(matched_ids, unmatched_paths)`, each in playlist order.
pub fn match_tracks(
    playlist: &[TrackReference],
    library: &[LibraryRecord],
) -> (Vec<String>, Vec<PathBuf>) {
    LibraryMatcher::new(library)
        .match_outcomes(playlist)
        .into_parts()
}
