//! Scoring of predicted diets against ground truth.
//!
//! The pipeline per entity: deduplicate both phrase lists by head word
//! ([`crate::phrase`]), count verbatim matches among the top-k predictions
//! ([`metrics`]), then combine entities into micro and macro summary rows
//! ([`aggregate`]) and a fixed-width table ([`table`]). The [`driver`] ties
//! the stages together.

pub mod aggregate;
pub mod driver;
pub mod metrics;
pub mod table;

pub use aggregate::{macro_average, micro_average, Averages};
pub use driver::{evaluate_entity, evaluate_predictions};
pub use metrics::{f1, precision_at_k, recall_at_k, true_positives_at_k, EntityResult};
pub use table::render_table;
