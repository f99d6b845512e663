//! Fixed-width results table.
//!
//! Layout: a dashed rule, the header row, a double rule, one row per entity,
//! then the micro- and macro-average rows each introduced by a double rule,
//! and a dashed rule to close. The entity column is 15 characters wide,
//! metric columns 8; floats print with 3 decimal places.
//!
//! ```text
//! +---------------+--------+--------+--------+
//! | Animal        | P@5    | R@5    | F1@5   |
//! +===============+========+========+========+
//! | cat           | 0.500  | 0.500  | 0.500  |
//! +===============+========+========+========+
//! | Micro avg.    | 0.500  | 0.500  | 0.500  |
//! +===============+========+========+========+
//! | Macro avg.    | 0.500  | 0.500  | 0.500  |
//! +---------------+--------+--------+--------+
//! ```

use super::aggregate::{macro_average, micro_average};
use super::metrics::EntityResult;
use crate::{Error, Result};

/// Width of the entity-name column.
pub const ENTITY_COL_WIDTH: usize = 15;

/// Width of each metric column.
pub const METRIC_COL_WIDTH: usize = 8;

fn rule(sep: char) -> String {
    format!(
        "+{}+{}+{}+{}+\n",
        sep.to_string().repeat(ENTITY_COL_WIDTH),
        sep.to_string().repeat(METRIC_COL_WIDTH),
        sep.to_string().repeat(METRIC_COL_WIDTH),
        sep.to_string().repeat(METRIC_COL_WIDTH),
    )
}

fn row(entity: &str, p: &str, r: &str, f: &str) -> String {
    format!(
        "| {:<ew$}| {:<mw$}| {:<mw$}| {:<mw$}|\n",
        entity,
        p,
        r,
        f,
        ew = ENTITY_COL_WIDTH - 1,
        mw = METRIC_COL_WIDTH - 1,
    )
}

fn metric(value: f64) -> String {
    format!("{:.3}", value)
}

/// Render per-entity results plus aggregate rows as a fixed-width table.
///
/// Requires a non-empty, cutoff-consistent result set: without a result there
/// is no cutoff to name the columns after.
pub fn render_table(results: &[EntityResult]) -> Result<String> {
    let Some(first) = results.first() else {
        return Err(Error::evaluation("cannot render an empty result set"));
    };
    let micro = micro_average(results)?;
    let macro_avg = macro_average(results)?;
    let k = first.k;

    let mut out = String::new();
    out.push_str(&rule('-'));
    out.push_str(&row(
        "Animal",
        &format!("P@{}", k),
        &format!("R@{}", k),
        &format!("F1@{}", k),
    ));
    out.push_str(&rule('='));
    for result in results {
        out.push_str(&row(
            &result.entity,
            &metric(result.precision),
            &metric(result.recall),
            &metric(result.f1),
        ));
    }
    out.push_str(&rule('='));
    out.push_str(&row(
        "Micro avg.",
        &metric(micro.precision),
        &metric(micro.recall),
        &metric(micro.f1),
    ));
    out.push_str(&rule('='));
    out.push_str(&row(
        "Macro avg.",
        &metric(macro_avg.precision),
        &metric(macro_avg.recall),
        &metric(macro_avg.f1),
    ));
    out.push_str(&rule('-'));
    Ok(out)
}
