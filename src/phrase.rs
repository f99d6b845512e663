//! Phrase normalization by head word.
//!
//! Ground-truth and predicted phrases name the same thing in many surface
//! forms ("mice", "a mouse", "small mice"). Scoring deduplicates each list by
//! a representative head word so one underlying answer is only counted once.
//! The head word is used only to deduplicate; the surviving entry is always
//! the original phrase.

use std::collections::{HashMap, HashSet};

/// Irregular plural forms the suffix rules get wrong.
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("algae", "alga"),
    ("cacti", "cactus"),
    ("calves", "calf"),
    ("children", "child"),
    ("feet", "foot"),
    ("fungi", "fungus"),
    ("geese", "goose"),
    ("halves", "half"),
    ("hooves", "hoof"),
    ("knives", "knife"),
    ("larvae", "larva"),
    ("leaves", "leaf"),
    ("lice", "louse"),
    ("lives", "life"),
    ("mice", "mouse"),
    ("octopi", "octopus"),
    ("oxen", "ox"),
    ("people", "person"),
    ("pupae", "pupa"),
    ("species", "species"),
    ("teeth", "tooth"),
    ("wolves", "wolf"),
];

/// Rule-based English noun lemmatizer.
///
/// The linguistic resource behind phrase normalization. Construct it once at
/// process start and pass it by reference wherever phrases are normalized;
/// there is no hidden process-wide instance.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    irregular: HashMap<&'static str, &'static str>,
}

impl Lemmatizer {
    /// Create a lemmatizer with the built-in irregular-noun table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            irregular: IRREGULAR_NOUNS.iter().copied().collect(),
        }
    }

    /// Reduce a lower-cased word to its singular lemma.
    #[must_use]
    pub fn lemma(&self, word: &str) -> String {
        if let Some(singular) = self.irregular.get(word) {
            return (*singular).to_string();
        }
        let n = word.len();
        if let Some(stem) = word.strip_suffix("ies") {
            if n > 4 {
                return format!("{}y", stem);
            }
        }
        for suffix in ["ses", "xes", "zes", "ches", "shes", "oes"] {
            if word.ends_with(suffix) && n > suffix.len() + 1 {
                return word[..n - 2].to_string();
            }
        }
        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return word.to_string();
        }
        if let Some(stem) = word.strip_suffix('s') {
            if n > 3 {
                return stem.to_string();
            }
        }
        word.to_string()
    }

    /// Derive the head word of a phrase.
    ///
    /// The syntactic head of an English noun phrase is its final noun, so the
    /// last whitespace-delimited token of the lower-cased, trimmed phrase is
    /// lemmatized. When that token carries no alphanumeric content the raw
    /// token is returned instead, and an empty phrase yields an empty string.
    /// This never fails.
    #[must_use]
    pub fn head_word(&self, phrase: &str) -> String {
        let lowered = phrase.trim().to_lowercase();
        let Some(last) = lowered.split_whitespace().next_back() else {
            return lowered;
        };
        let stripped = last.trim_matches(|c: char| !c.is_alphanumeric());
        if stripped.is_empty() {
            return last.to_string();
        }
        self.lemma(stripped)
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Deduplicate a phrase list by head word, preserving order.
///
/// The first phrase seen for each head word wins; later phrases whose head
/// repeats an earlier one are dropped. Surviving phrases are returned
/// verbatim, in their original relative order. Always returns a (possibly
/// empty) list.
#[must_use]
pub fn normalize_phrase_list(lemmatizer: &Lemmatizer, phrases: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    for phrase in phrases {
        if seen.insert(lemmatizer.head_word(phrase)) {
            kept.push(phrase.clone());
        }
    }
    kept
}
