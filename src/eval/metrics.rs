//! Ranking metrics for one entity's predicted diet.
//!
//! All metrics score a ranked prediction list against an unordered target
//! list at a cutoff `k`: only the first `k` predictions count. Membership is
//! tested by lower-cased verbatim equality; deduplication by head word
//! happens earlier, in [`crate::phrase::normalize_phrase_list`].
//!
//! Every function here is total over its inputs. Degenerate cases (empty
//! lists, `k == 0`, `k` past the end of either list) resolve to `0.0` or an
//! empty count, never a panic.

use serde::{Deserialize, Serialize};

/// Lower-cased verbatim membership test.
fn contains_phrase(list: &[String], phrase: &str) -> bool {
    let phrase = phrase.to_lowercase();
    list.iter().any(|candidate| candidate.to_lowercase() == phrase)
}

/// The prediction prefix the cutoff admits.
fn considered(predicted: &[String], k: usize) -> &[String] {
    &predicted[..predicted.len().min(k)]
}

/// Precision at `k`: matched predictions in the top `k`, over the number of
/// predictions considered. `0.0` when no predictions are considered.
#[must_use]
pub fn precision_at_k(target: &[String], predicted: &[String], k: usize) -> f64 {
    let considered = considered(predicted, k);
    if considered.is_empty() {
        return 0.0;
    }
    let tp = true_positives_at_k(target, predicted, k);
    tp as f64 / considered.len() as f64
}

/// Recall at `k`: target entries found in the top `k` predictions, over the
/// target size. `0.0` when the target is empty.
#[must_use]
pub fn recall_at_k(target: &[String], predicted: &[String], k: usize) -> f64 {
    if target.is_empty() {
        return 0.0;
    }
    let considered = considered(predicted, k);
    let hits = target
        .iter()
        .filter(|tgt| contains_phrase(considered, tgt))
        .count();
    hits as f64 / target.len() as f64
}

/// Harmonic mean of precision and recall. `0.0` when both are zero.
#[must_use]
pub fn f1(p: f64, r: f64) -> f64 {
    if p + r == 0.0 {
        return 0.0;
    }
    2.0 * p * r / (p + r)
}

/// Number of top-`k` predictions present in the target list.
///
/// The numerator of [`precision_at_k`].
#[must_use]
pub fn true_positives_at_k(target: &[String], predicted: &[String], k: usize) -> usize {
    considered(predicted, k)
        .iter()
        .filter(|pred| contains_phrase(target, pred))
        .count()
}

/// Scores for one entity at a fixed cutoff.
///
/// Immutable once computed. Carries the cutoff it was computed at so
/// aggregation can reject mixed-cutoff result sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityResult {
    /// Entity the scores belong to.
    pub entity: String,
    /// Cutoff the scores were computed at.
    pub k: usize,
    /// Precision at `k`.
    pub precision: f64,
    /// Recall at `k`.
    pub recall: f64,
    /// F1 at `k`.
    pub f1: f64,
    /// True positives among the top `k` predictions.
    pub true_positives: usize,
    /// Number of predictions considered (at most `k`).
    pub predicted_size: usize,
    /// Size of the normalized target list.
    pub target_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn precision_counts_matches_in_prefix() {
        let target = strings(&["fish", "mouse"]);
        let predicted = strings(&["fish", "bird", "mouse"]);
        assert!((precision_at_k(&target, &predicted, 2) - 0.5).abs() < 1e-9);
        assert!((precision_at_k(&target, &predicted, 3) - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn precision_empty_prefix_is_zero() {
        let target = strings(&["fish"]);
        assert_eq!(precision_at_k(&target, &[], 5), 0.0);
        assert_eq!(precision_at_k(&target, &strings(&["fish"]), 0), 0.0);
    }

    #[test]
    fn recall_counts_targets_found() {
        let target = strings(&["fish", "mouse"]);
        let predicted = strings(&["fish", "bird"]);
        assert!((recall_at_k(&target, &predicted, 2) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn recall_empty_target_is_zero() {
        assert_eq!(recall_at_k(&[], &strings(&["fish"]), 5), 0.0);
    }

    #[test]
    fn recall_is_one_when_all_targets_in_prefix() {
        let target = strings(&["fish", "mouse"]);
        let predicted = strings(&["mouse", "fish", "bird"]);
        assert!((recall_at_k(&target, &predicted, 3) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cutoff_limits_recall() {
        let target = strings(&["fish", "mouse"]);
        let predicted = strings(&["bird", "fish", "mouse"]);
        assert_eq!(recall_at_k(&target, &predicted, 1), 0.0);
    }

    #[test]
    fn membership_ignores_case() {
        let target = strings(&["Fish"]);
        let predicted = strings(&["fish"]);
        assert!((precision_at_k(&target, &predicted, 1) - 1.0).abs() < 1e-9);
        assert!((recall_at_k(&target, &predicted, 1) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn k_past_both_lists_is_safe() {
        let target = strings(&["fish"]);
        let predicted = strings(&["fish"]);
        assert!((precision_at_k(&target, &predicted, 30) - 1.0).abs() < 1e-9);
        assert!((recall_at_k(&target, &predicted, 30) - 1.0).abs() < 1e-9);
        assert_eq!(true_positives_at_k(&target, &predicted, 30), 1);
    }

    #[test]
    fn f1_is_harmonic_mean() {
        assert!((f1(0.5, 0.5) - 0.5).abs() < 1e-9);
        assert!((f1(1.0, 0.5) - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(f1(0.0, 0.0), 0.0);
    }

    #[test]
    fn true_positives_matches_precision_numerator() {
        let target = strings(&["fish", "mouse", "worm"]);
        let predicted = strings(&["fish", "bird", "worm", "grass"]);
        assert_eq!(true_positives_at_k(&target, &predicted, 3), 2);
        assert_eq!(true_positives_at_k(&target, &predicted, 1), 1);
        assert_eq!(true_positives_at_k(&target, &predicted, 0), 0);
    }
}
