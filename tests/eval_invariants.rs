//! Scenario tests for the scoring core.

use forage::eval::{
    evaluate_entity, evaluate_predictions, f1, macro_average, micro_average, precision_at_k,
    recall_at_k, EntityResult,
};
use forage::phrase::Lemmatizer;
use forage::DietMap;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn diet_map(entries: &[(&str, &[&str])]) -> DietMap {
    entries
        .iter()
        .map(|(entity, phrases)| ((*entity).to_string(), strings(phrases)))
        .collect()
}

#[test]
fn cat_scenario() {
    // Target {"cat": ["fish", "mouse", "fish"]} normalizes to ["fish",
    // "mouse"]; prediction ["fish", "bird"] at k=2 matches only "fish".
    let lem = Lemmatizer::new();
    let targets = diet_map(&[("cat", &["fish", "mouse", "fish"])]);
    let predictions = diet_map(&[("cat", &["fish", "bird"])]);

    let results = evaluate_predictions(&lem, &targets, &predictions, 2, false).unwrap();
    assert_eq!(results.len(), 1);
    let cat = &results[0];
    assert_eq!(cat.entity, "cat");
    assert!((cat.precision - 0.5).abs() < 1e-9);
    assert!((cat.recall - 0.5).abs() < 1e-9);
    assert!((cat.f1 - 0.5).abs() < 1e-9);
    assert_eq!(cat.true_positives, 1);
    assert_eq!(cat.predicted_size, 2);
    assert_eq!(cat.target_size, 2);
}

#[test]
fn absent_entity_scores_zero_and_run_continues() {
    let lem = Lemmatizer::new();
    let targets = diet_map(&[("cat", &["fish"]), ("dog", &["bones"])]);
    let predictions = diet_map(&[("cat", &["fish"])]);

    let results = evaluate_predictions(&lem, &targets, &predictions, 5, false).unwrap();
    assert_eq!(results.len(), 2);
    let dog = &results[1];
    assert_eq!(dog.entity, "dog");
    assert_eq!(dog.precision, 0.0);
    assert_eq!(dog.recall, 0.0);
    assert_eq!(dog.f1, 0.0);
}

#[test]
fn cutoff_beyond_both_lists_uses_full_lists() {
    let target = strings(&["fish", "mouse"]);
    let predicted = strings(&["fish"]);
    assert!((precision_at_k(&target, &predicted, 30) - 1.0).abs() < 1e-9);
    assert!((recall_at_k(&target, &predicted, 30) - 0.5).abs() < 1e-9);
}

#[test]
fn perfect_and_zero_entities_macro_average_to_half() {
    let lem = Lemmatizer::new();
    let targets = diet_map(&[("cat", &["fish", "mouse"]), ("dog", &["bones"])]);
    let predictions = diet_map(&[("cat", &["fish", "mouse"]), ("dog", &["grass"])]);

    let results = evaluate_predictions(&lem, &targets, &predictions, 5, false).unwrap();
    let macro_avg = macro_average(&results).unwrap();
    assert!((macro_avg.precision - 0.5).abs() < 1e-9);
    assert!((macro_avg.recall - 0.5).abs() < 1e-9);
    assert!((macro_avg.f1 - 0.5).abs() < 1e-9);

    // Micro works from absolute counts: 2 TP, 3 predicted, 3 targeted.
    let micro = micro_average(&results).unwrap();
    assert!((micro.precision - 2.0 / 3.0).abs() < 1e-9);
    assert!((micro.recall - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn macro_f1_comes_from_macro_means() {
    // Both entities have F1 = 1/3, so averaging per-entity F1 would give
    // 1/3. Macro-F1 must instead be the harmonic mean of macro-P and
    // macro-R, which are both 0.6 here.
    let results = vec![
        EntityResult {
            entity: "cat".to_string(),
            k: 5,
            precision: 1.0,
            recall: 0.2,
            f1: f1(1.0, 0.2),
            true_positives: 1,
            predicted_size: 1,
            target_size: 5,
        },
        EntityResult {
            entity: "dog".to_string(),
            k: 5,
            precision: 0.2,
            recall: 1.0,
            f1: f1(0.2, 1.0),
            true_positives: 1,
            predicted_size: 5,
            target_size: 1,
        },
    ];
    let macro_avg = macro_average(&results).unwrap();
    assert!((macro_avg.f1 - 0.6).abs() < 1e-9);
    let mean_of_entity_f1 = (results[0].f1 + results[1].f1) / 2.0;
    assert!((macro_avg.f1 - mean_of_entity_f1).abs() > 0.2);
}

#[test]
fn duplicate_surface_forms_cannot_inflate_precision() {
    // Four spellings of one answer collapse to a single prediction.
    let lem = Lemmatizer::new();
    let result = evaluate_entity(
        &lem,
        "owl",
        &strings(&["mouse"]),
        &strings(&["mouse", "mice", "a mouse", "field mice"]),
        4,
    );
    assert_eq!(result.predicted_size, 1);
    assert!((result.precision - 1.0).abs() < 1e-9);
    assert!((result.recall - 1.0).abs() < 1e-9);
}

#[test]
fn empty_everything_scores_zero() {
    let lem = Lemmatizer::new();
    let result = evaluate_entity(&lem, "cat", &[], &[], 5);
    assert_eq!(result.precision, 0.0);
    assert_eq!(result.recall, 0.0);
    assert_eq!(result.f1, 0.0);
    assert_eq!(result.true_positives, 0);
    assert_eq!(result.predicted_size, 0);
    assert_eq!(result.target_size, 0);
}
