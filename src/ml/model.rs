use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::model_selection::train_test_split;
use thiserror::Error;

use super::metrics::{ConfusionMatrix, RocCurve};
use super::table::MlTable;
use super::{FOREST_SEED, MlReport, N_TREES, SPLIT_SEED, TEST_FRACTION};

/// Failures bubbling out of the classifier library. Contained to the model
/// output slots; the rest of the dashboard keeps rendering.
#[derive(Debug, Error)]
pub enum MlError {
    #[error(transparent)]
    Library(#[from] smartcore::error::Failed),
}

// ---------------------------------------------------------------------------
// One split, one fit, one report
// ---------------------------------------------------------------------------

/// Split the ML-ready table 80/20, fit the random forest, and derive every
/// model metric in one pass.
///
/// Both the split and the forest are seeded, so the report is reproducible
/// for a given table.
pub fn fit_and_evaluate(table: &MlTable) -> Result<MlReport, MlError> {
    let rows: Vec<Vec<f64>> = table.features.iter().map(|r| r.to_vec()).collect();
    let x = DenseMatrix::from_2d_vec(&rows)?;
    let y = table.labels.clone();

    let (x_train, x_test, y_train, y_test) =
        train_test_split(&x, &y, TEST_FRACTION, true, Some(SPLIT_SEED));

    let params = RandomForestClassifierParameters::default()
        .with_n_trees(N_TREES)
        .with_seed(FOREST_SEED);
    let forest = RandomForestClassifier::fit(&x_train, &y_train, params)?;

    let predicted = forest.predict(&x_test)?;
    let confusion = ConfusionMatrix::from_labels(&y_test, &predicted);

    // Class-1 probabilities drive the ROC sweep. A forest trained on a
    // single class reports one probability column; the hard predictions
    // stand in for scores there (the curve is undefined anyway).
    let probabilities = forest.predict_proba(&x_test)?;
    let (_, class_count) = probabilities.shape();
    let scores: Vec<f64> = if class_count >= 2 {
        (0..y_test.len()).map(|i| *probabilities.get((i, 1))).collect()
    } else {
        predicted.iter().map(|&label| f64::from(label)).collect()
    };
    let roc = RocCurve::from_scores(&y_test, &scores);

    Ok(MlReport {
        train_rows: y_train.len(),
        test_rows: y_test.len(),
        accuracy: confusion.accuracy(),
        confusion,
        roc,
    })
}
