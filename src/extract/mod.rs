//! Diet extraction strategies.
//!
//! Each strategy implements the [`crate::Extractor`] trait: entity plus
//! retrieved documents in, scored candidate phrases out. Two concrete
//! strategies ship with the crate:
//!
//! - [`PatternExtractor`]: the baseline, a syntactic "X eats Y" pattern
//!   matcher with frequency scores
//! - [`StubExtractor`]: the user-fillable variant with unconstrained logic

pub mod pattern;
pub mod stub;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

pub use pattern::PatternExtractor;
pub use stub::StubExtractor;

/// A candidate phrase with the score an extractor assigned it.
///
/// Scores only rank candidates; their scale carries no meaning to the
/// harness. Frequency counts and model confidences both work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPhrase {
    /// Candidate phrase.
    pub phrase: String,
    /// Ranking score, higher is better.
    pub score: f64,
}

impl ScoredPhrase {
    /// Create a scored phrase.
    #[must_use]
    pub fn new(phrase: impl Into<String>, score: f64) -> Self {
        Self {
            phrase: phrase.into(),
            score,
        }
    }
}

/// Order candidates by descending score and strip the scores.
///
/// The sort is stable: candidates with equal scores keep the order the
/// extractor returned them in.
#[must_use]
pub fn rank_phrases(mut scored: Vec<ScoredPhrase>) -> Vec<String> {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.into_iter().map(|s| s.phrase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_sorts_by_descending_score() {
        let scored = vec![
            ScoredPhrase::new("grass", 2.0),
            ScoredPhrase::new("fish", 10.0),
            ScoredPhrase::new("worms", 5.0),
        ];
        assert_eq!(rank_phrases(scored), vec!["fish", "worms", "grass"]);
    }

    #[test]
    fn rank_is_stable_for_ties() {
        let scored = vec![
            ScoredPhrase::new("fish", 3.0),
            ScoredPhrase::new("mice", 3.0),
            ScoredPhrase::new("grass", 3.0),
        ];
        assert_eq!(rank_phrases(scored), vec!["fish", "mice", "grass"]);
    }

    #[test]
    fn rank_empty_is_empty() {
        assert!(rank_phrases(Vec::new()).is_empty());
    }
}
