//! User-supplied extraction strategy.

use log::{info, warn};

use crate::corpus::Document;
use crate::{Extractor, Result, ScoredPhrase};

/// The extraction strategy you are expected to fill in.
///
/// Extract things the animal eats that are explicitly mentioned in the given
/// documents, scored so that better candidates rank higher; frequency counts
/// work well as scores. `document.text` carries the content; `url` and
/// `title` are available when useful. See [`crate::PatternExtractor`] for a
/// worked example. External commonsense resources are off limits: every
/// returned phrase must be supported by the documents themselves.
pub struct StubExtractor;

impl StubExtractor {
    /// Create the stub.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for StubExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for StubExtractor {
    fn extract(&self, animal: &str, documents: &[Document]) -> Result<Vec<ScoredPhrase>> {
        info!(
            "animal \"{}\": {} documents available",
            animal,
            documents.len()
        );

        // Replace this body with your own extraction logic.
        warn!("StubExtractor has no implementation yet; returning no candidates");
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "stub"
    }

    fn description(&self) -> &'static str {
        "User-supplied diet extractor (unimplemented)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_returns_no_candidates() {
        let extractor = StubExtractor::new();
        let documents = vec![Document::from_text("Cats eat fish.")];
        assert!(extractor.extract("cat", &documents).unwrap().is_empty());
    }
}
