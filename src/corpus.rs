//! Corpus file formats and readers.
//!
//! Three inputs make up a data directory:
//!
//! - `animals.txt`: one entity name per line, case-insensitive
//! - `documents/<animal>.jsonl.gz`: gzip-compressed JSONL, one retrieved
//!   document per line
//! - `labels.json`: optional ground truth, entity name to list of phrases
//!
//! Predictions are written back as a single JSON object mapping each entity
//! to its ranked phrase list. Entity keys are trimmed and lower-cased at load
//! time so lookups never depend on the casing of the source files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Entity name mapped to an ordered list of phrases.
///
/// Used for both ground truth (order irrelevant) and predictions (ranked,
/// best first). Insertion order of the underlying file is preserved.
pub type DietMap = IndexMap<String, Vec<String>>;

/// One retrieved document about an entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document body. The only field extraction relies on.
    pub text: String,
    /// Entity the document was retrieved for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal: Option<String>,
    /// Source URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Document title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Document {
    /// Create a document carrying only a body.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            animal: None,
            url: None,
            title: None,
        }
    }
}

/// Read an entity list file: one name per line, blank lines ignored.
pub fn read_animal_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .map_err(|e| Error::dataset(format!("cannot open \"{}\": {}", path.display(), e)))?;
    let mut animals = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            animals.push(name.to_lowercase());
        }
    }
    Ok(animals)
}

/// Read a ground-truth-shaped JSON file (entity name to phrase list).
///
/// Also used for prediction files, which share the format. Keys are
/// normalized (trim + lowercase); file order is preserved.
pub fn read_ground_truth_file(path: &Path) -> Result<DietMap> {
    let file = File::open(path)
        .map_err(|e| Error::dataset(format!("cannot open \"{}\": {}", path.display(), e)))?;
    let raw: DietMap = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::parse(format!("\"{}\": {}", path.display(), e)))?;
    Ok(raw
        .into_iter()
        .map(|(entity, phrases)| (entity.trim().to_lowercase(), phrases))
        .collect())
}

/// Read a gzip-compressed JSONL document file.
///
/// Each non-blank line must be a JSON object with at least a `text` field.
pub fn read_document_file(path: &Path) -> Result<Vec<Document>> {
    let file = File::open(path)
        .map_err(|e| Error::dataset(format!("cannot open \"{}\": {}", path.display(), e)))?;
    let reader = BufReader::new(GzDecoder::new(file));
    let mut documents = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let document = serde_json::from_str(&line).map_err(|e| {
            Error::parse(format!("\"{}\" line {}: {}", path.display(), lineno + 1, e))
        })?;
        documents.push(document);
    }
    Ok(documents)
}

/// Path of the document file for an entity, under the documents directory.
///
/// Spaces in multi-word names map to underscores: `polar bear` is stored as
/// `polar_bear.jsonl.gz`.
#[must_use]
pub fn document_file_path(doc_dir: &Path, animal: &str) -> PathBuf {
    doc_dir.join(format!("{}.jsonl.gz", animal.replace(' ', "_")))
}

/// Write a predictions file: entity name to ranked phrase list, pretty JSON.
pub fn write_predictions_file(path: &Path, predictions: &DietMap) -> Result<()> {
    let json = serde_json::to_string_pretty(predictions)?;
    std::fs::write(path, json)?;
    Ok(())
}
