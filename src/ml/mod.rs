/// Survival-classifier layer: feature extraction, one shared fit, metrics.
///
/// The split and fit happen exactly once per distinct filter value, inside
/// `Session::prepared_ml_data()`; the metrics, confusion-matrix and ROC
/// slots all read the resulting [`MlReport`] instead of refitting.

pub mod metrics;
pub mod model;
pub mod table;

pub use metrics::{ConfusionMatrix, RocCurve};
pub use model::{MlError, fit_and_evaluate};
pub use table::MlTable;

/// Fewer ML-ready rows than this and no model is fitted.
pub const MIN_ML_ROWS: usize = 10;

/// Fraction of ML-ready rows held out for evaluation.
pub const TEST_FRACTION: f32 = 0.2;

/// Seed for the shuffled train/test split.
pub const SPLIT_SEED: u64 = 42;

/// Seed for the random forest itself.
pub const FOREST_SEED: u64 = 42;

/// Number of trees in the forest.
pub const N_TREES: u16 = 100;

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// Everything the three model slots need, derived from a single fit.
#[derive(Debug, Clone, PartialEq)]
pub struct MlReport {
    pub train_rows: usize,
    pub test_rows: usize,
    /// Test accuracy; always equals `(TN + TP) / total` of `confusion`.
    pub accuracy: f64,
    pub confusion: ConfusionMatrix,
    /// `None` when the test split contains a single class.
    pub roc: Option<RocCurve>,
}

/// Result of `prepared_ml_data()`.
#[derive(Debug, Clone, PartialEq)]
pub enum MlOutcome {
    /// Fewer than [`MIN_ML_ROWS`] complete rows after cleaning.
    Insufficient { rows: usize },
    /// The library refused to fit or predict. Contained to the model slots.
    Failed(String),
    Ready(MlReport),
}
