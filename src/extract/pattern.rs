//! Baseline pattern extractor.
//!
//! Finds occurrences of `<animal>s? [eat|eats|ate|eaten|eating] <word>` in
//! each document and tallies the word that follows the verb. A small
//! function-word list stands in for a part-of-speech check: captures like
//! "the" or "mostly" are discarded, everything else is treated as a noun.
//! Scores are raw frequencies across all documents.

use std::collections::{HashMap, HashSet};

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::corpus::Document;
use crate::{Error, Extractor, Result, ScoredPhrase};

/// Captures that cannot name a food: determiners, pronouns, quantifiers,
/// common adverbs and prepositions seen right after an "eats".
static FUNCTION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "this", "that", "these", "those", "their", "its", "his", "her", "it",
        "them", "some", "many", "much", "more", "most", "mostly", "mainly", "primarily",
        "almost", "nearly", "about", "around", "approximately", "only", "both", "all", "any",
        "no", "not", "other", "others", "each", "every", "several", "various", "certain",
        "few", "fewer", "less", "little", "lots", "plenty", "enough", "small", "large", "big",
        "young", "fresh", "dead", "live", "whole", "anything", "everything", "something",
        "nothing", "what", "whatever", "very", "quite", "rather", "too", "also", "even",
        "typically", "usually", "often", "sometimes", "regularly", "occasionally", "up",
        "on", "in", "at", "by", "from", "out", "of", "over", "during", "when", "where",
        "while", "and", "or", "but",
    ]
    .into_iter()
    .collect()
});

/// Baseline diet extractor: syntactic pattern search with frequency scores.
pub struct PatternExtractor;

impl PatternExtractor {
    /// Create a pattern extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The per-animal search pattern, case-insensitive, singular or plural.
    fn diet_pattern(animal: &str) -> Result<Regex> {
        let pattern = format!(
            r"(?i)\b{}s?\s+(?:eats?|ate|eaten|eating)\s+([a-z]+)",
            regex::escape(animal)
        );
        Regex::new(&pattern).map_err(|e| {
            Error::extraction(format!("bad diet pattern for \"{}\": {}", animal, e))
        })
    }
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for PatternExtractor {
    fn extract(&self, animal: &str, documents: &[Document]) -> Result<Vec<ScoredPhrase>> {
        let pattern = Self::diet_pattern(animal)?;
        info!(
            "animal \"{}\": scanning {} documents",
            animal,
            documents.len()
        );

        let mut counts: HashMap<String, u64> = HashMap::new();
        for document in documents {
            for caps in pattern.captures_iter(&document.text) {
                let object = caps[1].to_lowercase();
                if FUNCTION_WORDS.contains(object.as_str()) {
                    continue;
                }
                *counts.entry(object).or_insert(0) += 1;
            }
        }

        let mut scored: Vec<ScoredPhrase> = counts
            .into_iter()
            .map(|(phrase, count)| ScoredPhrase::new(phrase, count as f64))
            .collect();
        // Frequency order, ties alphabetical, so output is reproducible.
        scored.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.phrase.cmp(&b.phrase))
        });
        Ok(scored)
    }

    fn name(&self) -> &'static str {
        "pattern"
    }

    fn description(&self) -> &'static str {
        "Baseline pattern search: tallies the noun after \"<animal> eats\""
    }
}
