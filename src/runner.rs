//! Batch orchestration: extraction fan-out, prediction output, evaluation.
//!
//! One task per entity over a fixed-size worker pool. Tasks share nothing:
//! each loads its own document file, runs the extractor, and hands back a
//! ranked list keyed by entity. A failing entity is logged and dropped from
//! the predictions; it never aborts the batch.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use rayon::prelude::*;

use crate::corpus::{self, DietMap};
use crate::eval::{evaluate_predictions, EntityResult};
use crate::extract::{rank_phrases, PatternExtractor, StubExtractor};
use crate::phrase::Lemmatizer;
use crate::{Error, Extractor, Result, MAX_CUTOFF};

/// Configuration of one benchmark run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Data directory containing `documents/`, `animals.txt` and the
    /// optional `labels.json`.
    pub data_dir: PathBuf,
    /// Where the ranked predictions are written.
    pub out_file: PathBuf,
    /// Evaluation cutoff, in `1..=MAX_CUTOFF`.
    pub k: usize,
    /// Optional subset of entities to process; `None` means all.
    pub animals: Option<Vec<String>>,
    /// Use the baseline pattern extractor instead of the user solution.
    pub baseline: bool,
    /// Worker count for the extraction pool; capped at the entity count.
    pub workers: usize,
}

/// Run extraction over a data directory, write predictions, and evaluate
/// them when ground truth is present.
///
/// Returns the per-entity evaluation results, or `None` when the data
/// directory carries no `labels.json`.
pub fn run(lemmatizer: &Lemmatizer, config: &RunConfig) -> Result<Option<Vec<EntityResult>>> {
    if config.k == 0 || config.k > MAX_CUTOFF {
        return Err(Error::invalid_input(format!(
            "cutoff must be in 1..={}, got {}",
            MAX_CUTOFF, config.k
        )));
    }
    let data_dir = &config.data_dir;
    if !data_dir.is_dir() {
        return Err(Error::dataset(format!(
            "data directory \"{}\" does not exist",
            data_dir.display()
        )));
    }
    let doc_dir = data_dir.join("documents");
    if !doc_dir.is_dir() {
        return Err(Error::dataset(format!(
            "document directory \"{}\" does not exist",
            doc_dir.display()
        )));
    }
    let animal_file = data_dir.join("animals.txt");
    if !animal_file.is_file() {
        return Err(Error::dataset(format!(
            "entity list \"{}\" does not exist",
            animal_file.display()
        )));
    }
    info!("selected data directory \"{}\"", data_dir.display());

    let animals = select_animals(corpus::read_animal_file(&animal_file)?, config)?;

    let extractor: Box<dyn Extractor> = if config.baseline {
        Box::new(PatternExtractor::new())
    } else {
        Box::new(StubExtractor::new())
    };
    info!(
        "running the \"{}\" extractor for {} animals: {}",
        extractor.name(),
        animals.len(),
        animals.join(", ")
    );

    let workers = config.workers.clamp(1, animals.len());
    info!("number of workers: {}", workers);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| Error::extraction(format!("failed to build worker pool: {}", e)))?;

    let extractor = extractor.as_ref();
    let outcomes: Vec<(String, Result<Vec<String>>)> = pool.install(|| {
        animals
            .par_iter()
            .map(|animal| (animal.clone(), extract_one(extractor, &doc_dir, animal)))
            .collect()
    });

    let mut predictions = DietMap::new();
    for (animal, outcome) in outcomes {
        match outcome {
            Ok(ranked) => {
                predictions.insert(animal, ranked);
            }
            Err(e) => error!("extraction failed for \"{}\": {}", animal, e),
        }
    }

    corpus::write_predictions_file(&config.out_file, &predictions)?;
    info!(
        "wrote predictions for {} animals to \"{}\"",
        predictions.len(),
        config.out_file.display()
    );

    let labels_file = data_dir.join("labels.json");
    if !labels_file.is_file() {
        return Ok(None);
    }
    let targets = corpus::read_ground_truth_file(&labels_file)?;
    let results = evaluate_predictions(lemmatizer, &targets, &predictions, config.k, true)?;
    Ok(Some(results))
}

/// Apply the optional entity filter; unknown names are dropped with a
/// warning, exactly like names missing from the entity list file.
fn select_animals(available: Vec<String>, config: &RunConfig) -> Result<Vec<String>> {
    let animals = match &config.animals {
        None => available,
        Some(requested) => {
            let valid: HashSet<&str> = available.iter().map(String::as_str).collect();
            let mut selected = Vec::new();
            for name in requested {
                let name = name.trim().to_lowercase();
                if name.is_empty() {
                    continue;
                }
                if valid.contains(name.as_str()) {
                    selected.push(name);
                } else {
                    warn!("\"{}\" is not in the entity list; skipping", name);
                }
            }
            selected
        }
    };
    if animals.is_empty() {
        return Err(Error::dataset("no entities left to process"));
    }
    Ok(animals)
}

/// Load one entity's documents and produce its ranked prediction list.
fn extract_one(extractor: &dyn Extractor, doc_dir: &Path, animal: &str) -> Result<Vec<String>> {
    let path = corpus::document_file_path(doc_dir, animal);
    let documents = corpus::read_document_file(&path)?;
    let scored = extractor.extract(animal, &documents)?;
    Ok(rank_phrases(scored))
}
