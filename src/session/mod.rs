/// Session layer: the derived-data calculator.
///
/// A [`Session`] owns the filter inputs and one [`memo::Memo`] slot per
/// derived value. Each memo is keyed by the tuple of inputs the value
/// depends on, so mutating an input recomputes exactly the derived values
/// downstream of it: changing the age range invalidates everything, while
/// changing the selected variable only invalidates the variable summary.
///
/// The dataset handle is injected at construction and never mutated.

pub mod derived;
pub mod memo;

use std::sync::Arc;

use crate::data::filter::{FilterState, filtered_indices};
use crate::data::model::{PassengerDataset, Variable};
use crate::ml::{self, MlOutcome, MlTable};

use derived::{
    CorrelationGrid, FilteredView, ScatterData, VariableSummary, correlation_grid, scatter_data,
    summarize,
};
use memo::Memo;

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

pub struct Session {
    dataset: Arc<PassengerDataset>,
    /// Sidebar inputs; widgets mutate these directly.
    pub inputs: FilterState,

    filtered: Memo<(u32, u32), Arc<FilteredView>>,
    ml: Memo<(u32, u32), Arc<MlOutcome>>,
    summary: Memo<(u32, u32, Variable), Arc<VariableSummary>>,
    correlation: Memo<(u32, u32), Arc<Option<CorrelationGrid>>>,
    scatter: Memo<(u32, u32), Arc<ScatterData>>,
}

impl Session {
    pub fn new(dataset: Arc<PassengerDataset>) -> Self {
        Session {
            dataset,
            inputs: FilterState::default(),
            filtered: Memo::default(),
            ml: Memo::default(),
            summary: Memo::default(),
            correlation: Memo::default(),
            scatter: Memo::default(),
        }
    }

    pub fn dataset(&self) -> &PassengerDataset {
        &self.dataset
    }

    /// The filtered table for the current age range.
    pub fn filtered_data(&mut self) -> Arc<FilteredView> {
        let key = self.inputs.age_key();
        let dataset = Arc::clone(&self.dataset);
        let inputs = self.inputs;
        self.filtered.get_or_compute(key, move || {
            let indices = filtered_indices(&dataset, &inputs);
            Arc::new(FilteredView::new(dataset, indices))
        })
    }

    /// The shared classifier outcome for the current age range.
    ///
    /// Fits and evaluates at most once per distinct range; the metrics,
    /// confusion-matrix and ROC slots all read this cached report.
    pub fn prepared_ml_data(&mut self) -> Arc<MlOutcome> {
        let key = self.inputs.age_key();
        let view = self.filtered_data();
        self.ml.get_or_compute(key, move || {
            let table = MlTable::from_rows(view.rows());
            if table.len() < ml::MIN_ML_ROWS {
                return Arc::new(MlOutcome::Insufficient { rows: table.len() });
            }
            match ml::fit_and_evaluate(&table) {
                Ok(report) => Arc::new(MlOutcome::Ready(report)),
                Err(err) => {
                    log::error!("classifier fit failed: {err}");
                    Arc::new(MlOutcome::Failed(err.to_string()))
                }
            }
        })
    }

    /// Distribution summary for the currently selected variable.
    pub fn variable_summary(&mut self) -> Arc<VariableSummary> {
        let variable = self.inputs.variable;
        let (lo, hi) = self.inputs.age_key();
        let view = self.filtered_data();
        self.summary
            .get_or_compute((lo, hi, variable), move || Arc::new(summarize(&view, variable)))
    }

    /// Pairwise correlations over the numeric columns, when computable.
    pub fn correlation_grid(&mut self) -> Arc<Option<CorrelationGrid>> {
        let key = self.inputs.age_key();
        let view = self.filtered_data();
        self.correlation
            .get_or_compute(key, move || Arc::new(correlation_grid(&view)))
    }

    /// Complete rows for the 3-D scatter view.
    pub fn scatter_points(&mut self) -> Arc<ScatterData> {
        let key = self.inputs.age_key();
        let view = self.filtered_data();
        self.scatter
            .get_or_compute(key, move || Arc::new(scatter_data(&view)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Passenger;
    use crate::session::derived::{Companion, HEAD_ROWS};

    /// Deterministic little liner: 24 passengers with complete model
    /// columns, survival correlated with class and sex.
    fn dataset() -> Arc<PassengerDataset> {
        let mut passengers = Vec::new();
        for i in 0..24u32 {
            let pclass = (i % 3 + 1) as u8;
            let female = i % 2 == 0;
            let survived = u8::from(female || pclass == 1);
            passengers.push(Passenger {
                passenger_id: Some(i + 1),
                survived: Some(survived),
                pclass: Some(pclass),
                name: Some(format!("Passenger {i}")),
                sex: Some(if female { "female" } else { "male" }.to_string()),
                age: Some(5.0 + (i as f64) * 3.0),
                sib_sp: Some((i % 2) as u8),
                parch: Some((i % 4) as u8),
                fare: Some(10.0 + f64::from(pclass) * 15.0 + i as f64),
                embarked: Some(["S", "C", "Q"][(i % 3) as usize].to_string()),
            });
        }
        Arc::new(PassengerDataset::new(passengers))
    }

    #[test]
    fn full_range_shows_the_head_of_the_dataset() {
        let mut session = Session::new(dataset());
        session.inputs.variable = Variable::Pclass;

        let view = session.filtered_data();
        assert_eq!(view.len(), 24);

        let head = view.head(HEAD_ROWS);
        assert_eq!(head.len(), HEAD_ROWS);
        assert_eq!(head[0].passenger_id, Some(1));
        assert_eq!(head[4].passenger_id, Some(5));
    }

    #[test]
    fn survived_summary_is_a_two_slice_pie() {
        let mut session = Session::new(dataset());
        session.inputs.variable = Variable::Survived;

        let summary = session.variable_summary();
        assert!(matches!(summary.companion, Companion::Pie));
        assert_eq!(summary.counts.len(), 2);
        let total: f64 = summary.fractions().iter().map(|(_, f)| f).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unchanged_inputs_reuse_the_cached_values() {
        let mut session = Session::new(dataset());

        let first = session.filtered_data();
        let second = session.filtered_data();
        assert!(Arc::ptr_eq(&first, &second));

        let ml_first = session.prepared_ml_data();
        let ml_second = session.prepared_ml_data();
        assert!(Arc::ptr_eq(&ml_first, &ml_second));
    }

    #[test]
    fn variable_change_does_not_refit_the_model() {
        let mut session = Session::new(dataset());
        session.inputs.variable = Variable::Pclass;

        let before = session.prepared_ml_data();
        let summary_before = session.variable_summary();

        session.inputs.variable = Variable::Sex;
        let after = session.prepared_ml_data();
        let summary_after = session.variable_summary();

        assert!(Arc::ptr_eq(&before, &after));
        assert!(!Arc::ptr_eq(&summary_before, &summary_after));
    }

    #[test]
    fn age_change_invalidates_the_model() {
        let mut session = Session::new(dataset());
        let before = session.prepared_ml_data();

        session.inputs.age_min = 30;
        let after = session.prepared_ml_data();
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn model_report_is_reproducible_across_sessions() {
        let data = dataset();
        let report_a = Session::new(Arc::clone(&data)).prepared_ml_data();
        let report_b = Session::new(data).prepared_ml_data();
        assert_eq!(*report_a, *report_b);

        let MlOutcome::Ready(report) = &*report_a else {
            panic!("24 complete rows should fit");
        };
        assert_eq!(report.confusion.total(), report.test_rows);
        assert_eq!(report.accuracy, report.confusion.accuracy());
    }

    #[test]
    fn inverted_range_drives_every_slot_to_its_placeholder() {
        let mut session = Session::new(dataset());
        session.inputs.age_min = 80;
        session.inputs.age_max = 10;

        assert!(session.filtered_data().is_empty());
        assert_eq!(
            *session.prepared_ml_data(),
            MlOutcome::Insufficient { rows: 0 }
        );
        assert!(session.variable_summary().counts.is_empty());
        assert!(session.correlation_grid().is_none());
        assert!(!session.scatter_points().is_sufficient());
    }

    #[test]
    fn narrow_range_with_too_few_rows_reports_insufficient() {
        let mut session = Session::new(dataset());
        // ages run 5, 8, 11, …; [5, 14] keeps only four rows
        session.inputs.age_min = 5;
        session.inputs.age_max = 14;

        assert_eq!(session.filtered_data().len(), 4);
        assert_eq!(
            *session.prepared_ml_data(),
            MlOutcome::Insufficient { rows: 4 }
        );
    }
}
