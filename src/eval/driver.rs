//! Evaluation driver: scores a prediction map against a target map.

use log::{info, warn};

use super::metrics::{f1, precision_at_k, recall_at_k, true_positives_at_k, EntityResult};
use super::table::render_table;
use crate::corpus::DietMap;
use crate::phrase::{normalize_phrase_list, Lemmatizer};
use crate::{Error, Result, MAX_CUTOFF};

/// Score one entity's predicted phrases against its target phrases.
///
/// Both lists are deduplicated by head word before any counting, so repeated
/// surface forms of one answer cannot inflate either side. The cutoff is not
/// validated here; callers validate before invoking.
#[must_use]
pub fn evaluate_entity(
    lemmatizer: &Lemmatizer,
    entity: &str,
    target: &[String],
    predicted: &[String],
    k: usize,
) -> EntityResult {
    let target = normalize_phrase_list(lemmatizer, target);
    let predicted = normalize_phrase_list(lemmatizer, predicted);
    let precision = precision_at_k(&target, &predicted, k);
    let recall = recall_at_k(&target, &predicted, k);
    EntityResult {
        entity: entity.to_string(),
        k,
        precision,
        recall,
        f1: f1(precision, recall),
        true_positives: true_positives_at_k(&target, &predicted, k),
        predicted_size: predicted.len().min(k),
        target_size: target.len(),
    }
}

/// Score every entity in the target map and optionally print the table.
///
/// Scoring is target-driven: entities only present in the prediction map are
/// ignored, and an entity missing from the prediction map scores against an
/// empty list after a warning. Iteration follows the target map's insertion
/// order. Returns the per-entity results; aggregates can be recomputed with
/// [`crate::eval::micro_average`] and [`crate::eval::macro_average`].
pub fn evaluate_predictions(
    lemmatizer: &Lemmatizer,
    targets: &DietMap,
    predictions: &DietMap,
    k: usize,
    emit_table: bool,
) -> Result<Vec<EntityResult>> {
    if k == 0 || k > MAX_CUTOFF {
        return Err(Error::invalid_input(format!(
            "cutoff must be in 1..={}, got {}",
            MAX_CUTOFF, k
        )));
    }

    info!(
        "evaluating {} animals: {}",
        targets.len(),
        targets.keys().cloned().collect::<Vec<_>>().join(", ")
    );

    let mut results = Vec::with_capacity(targets.len());
    for (animal, target) in targets {
        let predicted = match predictions.get(animal) {
            Some(predicted) => predicted.as_slice(),
            None => {
                warn!("\"{}\" is not in the prediction list", animal);
                &[]
            }
        };
        results.push(evaluate_entity(lemmatizer, animal, target, predicted, k));
    }

    if emit_table {
        if results.is_empty() {
            warn!("no entities to evaluate; skipping the results table");
        } else {
            println!("Evaluation results:");
            print!("{}", render_table(&results)?);
        }
    }

    Ok(results)
}
