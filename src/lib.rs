//! # forage
//!
//! Diet extraction benchmark: given an animal and a set of retrieved
//! documents, extract the things the animal eats and score the result
//! against ground truth with precision/recall/F1 at a cutoff.
//!
//! - **Extraction**: pluggable [`Extractor`] strategies (baseline pattern
//!   search, user-supplied)
//! - **Scoring**: head-word deduplication, ranking metrics at k, micro and
//!   macro averages, fixed-width results table
//! - **Orchestration**: worker-pool fan-out over entities with per-entity
//!   failure isolation
//!
//! # Example
//!
//! ```
//! use forage::eval::evaluate_predictions;
//! use forage::phrase::Lemmatizer;
//! use forage::DietMap;
//!
//! let mut targets = DietMap::new();
//! targets.insert("cat".into(), vec!["fish".into(), "mouse".into()]);
//! let mut predictions = DietMap::new();
//! predictions.insert("cat".into(), vec!["fish".into(), "bird".into()]);
//!
//! let lemmatizer = Lemmatizer::new();
//! let results = evaluate_predictions(&lemmatizer, &targets, &predictions, 2, false).unwrap();
//! assert_eq!(results[0].true_positives, 1);
//! ```

#![warn(missing_docs)]

pub mod corpus;
pub mod error;
pub mod eval;
pub mod extract;
pub mod phrase;
pub mod runner;

pub use corpus::{DietMap, Document};
pub use error::{Error, Result};
pub use eval::{evaluate_predictions, EntityResult};
pub use extract::{rank_phrases, PatternExtractor, ScoredPhrase, StubExtractor};
pub use phrase::{normalize_phrase_list, Lemmatizer};

/// Largest supported evaluation cutoff.
pub const MAX_CUTOFF: usize = 30;

/// Trait for diet extraction strategies.
///
/// One call per entity: the entity name and its retrieved documents go in,
/// zero or more scored candidate phrases come out, in no particular order.
/// Scores are only used to rank candidates. Implementations must not mutate
/// the documents and should confine any failure to the returned error so the
/// harness can isolate it per entity.
pub trait Extractor: Send + Sync {
    /// Extract scored diet phrases for one entity from its documents.
    fn extract(&self, animal: &str, documents: &[Document]) -> Result<Vec<ScoredPhrase>>;

    /// Short identifier of the strategy.
    fn name(&self) -> &'static str {
        "unknown"
    }

    /// One-line description of the strategy.
    fn description(&self) -> &'static str {
        "Unknown diet extractor"
    }
}

/// A mock extractor for tests: returns a preset candidate list.
///
/// # Example
///
/// ```
/// use forage::{Extractor, MockExtractor, ScoredPhrase};
///
/// let mock = MockExtractor::new("test-mock")
///     .with_phrases(vec![ScoredPhrase::new("grass", 10.0)]);
/// let scored = mock.extract("sheep", &[]).unwrap();
/// assert_eq!(scored[0].phrase, "grass");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockExtractor {
    name: &'static str,
    phrases: Vec<ScoredPhrase>,
}

impl MockExtractor {
    /// Create a mock extractor.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            phrases: Vec::new(),
        }
    }

    /// Set the candidates to return on extraction.
    #[must_use]
    pub fn with_phrases(mut self, phrases: Vec<ScoredPhrase>) -> Self {
        self.phrases = phrases;
        self
    }
}

impl Extractor for MockExtractor {
    fn extract(&self, _animal: &str, _documents: &[Document]) -> Result<Vec<ScoredPhrase>> {
        Ok(self.phrases.clone())
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        "Mock diet extractor for testing"
    }
}
