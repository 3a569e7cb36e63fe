use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which lookup resolved a playlist entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    /// Normalized path equals a library path
    ExactPath,

    /// Normalized path equals a library path ignoring case
    CaseInsensitivePath,

    /// File name (ignoring case) is unique in the library
    Filename,
}

impl MatchTier {
    /// Human-readable tier name
    pub fn name(&self) -> &'static str {
        match self {
            MatchTier::ExactPath => "exact path",
            MatchTier::CaseInsensitivePath => "case-insensitive path",
            MatchTier::Filename => "filename",
        }
    }
}

/// Result of resolving one playlist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Matched { id: String, tier: MatchTier },
    Unmatched { path: PathBuf },
}

impl MatchOutcome {
    pub fn id(&self) -> Option<&str> {
        match self {
            MatchOutcome::Matched { id, .. } => Some(id),
            MatchOutcome::Unmatched { .. } => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }
}

/// Per-entry outcomes of matching one playlist, in playlist order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    outcomes: Vec<MatchOutcome>,
}

impl MatchReport {
    pub fn new(outcomes: Vec<MatchOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[MatchOutcome] {
        &self.outcomes
    }

    /// Matched library IDs in playlist order
    pub fn matched_ids(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(MatchOutcome::id)
    }

    /// Paths nothing in the library matched, in playlist order
    pub fn unmatched_paths(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            MatchOutcome::Unmatched { path } => Some(path.as_path()),
            MatchOutcome::Matched { .. } => None,
        })
    }

    pub fn matched_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_matched()).count()
    }

    pub fn unmatched_count(&self) -> usize {
        self.outcomes.len() - self.matched_count()
    }

    /// Number of entries resolved by the given tier
    pub fn tier_count(&self, tier: MatchTier) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, MatchOutcome::Matched { tier: t, .. } if *t == tier))
            .count()
    }

    /// Split into `(matched_ids, unmatched_paths)`, each in playlist order
    pub fn into_parts(self) -> (Vec<String>, Vec<PathBuf>) {
        let mut matched = Vec::new();
        let mut unmatched = Vec::new();

        for outcome in self.outcomes {
            match outcome {
                MatchOutcome::Matched { id, .. } => matched.push(id),
                MatchOutcome::Unmatched { path } => unmatched.push(path),
            }
        }

        (matched, unmatched)
    }
}
