//! Micro- and macro-averaging across per-entity results.
//!
//! Micro-averaging sums raw counts (true positives, list sizes) before
//! dividing, so entities with larger targets weigh more. Macro-averaging
//! takes the arithmetic mean of per-entity precision and recall, weighing
//! every entity equally. In both cases F1 is derived from the aggregate
//! precision and recall; macro-F1 is NOT the mean of per-entity F1 scores.
//!
//! All results in a set must share one cutoff; mixing cutoffs is a hard
//! error rather than a silent pick of the first result's `k`.

use serde::{Deserialize, Serialize};

use super::metrics::{f1, EntityResult};
use crate::{Error, Result};

/// Aggregate precision/recall/F1 triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    /// Aggregate precision.
    pub precision: f64,
    /// Aggregate recall.
    pub recall: f64,
    /// F1 of the aggregate precision and recall.
    pub f1: f64,
}

fn check_consistent_k(results: &[EntityResult]) -> Result<()> {
    let mut ks = results.iter().map(|r| r.k);
    if let Some(first) = ks.next() {
        if let Some(other) = ks.find(|&k| k != first) {
            return Err(Error::evaluation(format!(
                "inconsistent cutoff: k={} and k={} in the same result set",
                first, other
            )));
        }
    }
    Ok(())
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}

/// Micro-average: summed true positives over summed list sizes.
///
/// Fails on mixed cutoffs. An empty result set averages to all zeros.
pub fn micro_average(results: &[EntityResult]) -> Result<Averages> {
    check_consistent_k(results)?;
    let tp: usize = results.iter().map(|r| r.true_positives).sum();
    let predicted: usize = results.iter().map(|r| r.predicted_size).sum();
    let target: usize = results.iter().map(|r| r.target_size).sum();
    let precision = ratio(tp, predicted);
    let recall = ratio(tp, target);
    Ok(Averages {
        precision,
        recall,
        f1: f1(precision, recall),
    })
}

/// Macro-average: mean per-entity precision and recall, F1 from the means.
///
/// Fails on mixed cutoffs. An empty result set averages to all zeros.
pub fn macro_average(results: &[EntityResult]) -> Result<Averages> {
    check_consistent_k(results)?;
    if results.is_empty() {
        return Ok(Averages {
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
        });
    }
    let n = results.len() as f64;
    let precision = results.iter().map(|r| r.precision).sum::<f64>() / n;
    let recall = results.iter().map(|r| r.recall).sum::<f64>() / n;
    Ok(Averages {
        precision,
        recall,
        f1: f1(precision, recall),
    })
}
