//! Correction candidates.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A vocabulary entry paired with its distance to the token under repair.
///
/// Candidates order by distance first, then lexicographically by word, so a
/// minimum over candidates is deterministic even when the scan that produced
/// them ran in parallel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the original token.
    pub distance: usize,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new<S: Into<String>>(word: S, distance: usize) -> Self {
        Candidate {
            word: word.into(),
            distance,
        }
    }

    /// Consume the candidate, returning its word.
    pub fn into_word(self) -> String {
        self.word
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
