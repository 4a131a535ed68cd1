use std::collections::BTreeMap;
use std::sync::Arc;

use crate::data::model::{
    NumericColumn, Passenger, PassengerDataset, Variable, VariableKind,
};
use crate::stats::{Quartiles, pearson};

/// Rows shown by the head-of-data table.
pub const HEAD_ROWS: usize = 5;

/// Minimum complete rows before the 3-D view renders.
pub const MIN_SCATTER_ROWS: usize = 10;

// ---------------------------------------------------------------------------
// FilteredView – the filtered table
// ---------------------------------------------------------------------------

/// The filtered table: a dataset handle plus the indices of rows whose age
/// passed the range filter. Pure function of (dataset, age range).
#[derive(Debug, Clone)]
pub struct FilteredView {
    dataset: Arc<PassengerDataset>,
    indices: Vec<usize>,
}

impl FilteredView {
    pub fn new(dataset: Arc<PassengerDataset>, indices: Vec<usize>) -> Self {
        FilteredView { dataset, indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Filtered rows in dataset order.
    pub fn rows(&self) -> impl Iterator<Item = &Passenger> + '_ {
        self.indices.iter().map(|&i| self.dataset.row(i))
    }

    /// The first `n` filtered rows.
    pub fn head(&self, n: usize) -> Vec<&Passenger> {
        self.rows().take(n).collect()
    }
}

// ---------------------------------------------------------------------------
// VariableSummary – distribution data for the selected variable
// ---------------------------------------------------------------------------

/// Raw values for the distribution panels. Presentation (binning, bar
/// geometry) happens in the renderers; the summary is what gets memoized.
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    /// Numeric variable: observed values, optionally split by survival
    /// (absent for `Survived` itself, where the split is the variable).
    Numeric {
        values: Vec<f64>,
        by_survival: Option<[Vec<f64>; 2]>,
    },
    /// Categorical variable: per-survival counts aligned with
    /// [`VariableSummary::counts`] (`[perished, survived]` per label).
    Categorical { by_survival: Option<Vec<[usize; 2]>> },
}

/// The right-hand panel of the advanced distribution chart.
#[derive(Debug, Clone, PartialEq)]
pub enum Companion {
    /// Boxplot of the variable per survival group.
    SurvivalBoxes {
        perished: Option<Quartiles>,
        survived: Option<Quartiles>,
    },
    /// Pie over [`VariableSummary::counts`].
    Pie,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableSummary {
    pub variable: Variable,
    /// Value counts, most frequent first (ties by label).
    pub counts: Vec<(String, usize)>,
    pub dist: Distribution,
    pub companion: Companion,
}

impl VariableSummary {
    /// Pie fractions over the value counts; empty when nothing matched.
    pub fn fractions(&self) -> Vec<(String, f64)> {
        let total: usize = self.counts.iter().map(|(_, n)| n).sum();
        if total == 0 {
            return Vec::new();
        }
        self.counts
            .iter()
            .map(|(label, n)| (label.clone(), *n as f64 / total as f64))
            .collect()
    }
}

/// Build the distribution summary for the selected variable.
pub fn summarize(view: &FilteredView, variable: Variable) -> VariableSummary {
    let mut tally: BTreeMap<String, usize> = BTreeMap::new();
    for p in view.rows() {
        if let Some(label) = variable.value_label(p) {
            *tally.entry(label).or_default() += 1;
        }
    }
    let mut counts: Vec<(String, usize)> = tally.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let dist = match variable.kind() {
        VariableKind::Numeric => {
            let values: Vec<f64> = view.rows().filter_map(|p| variable.numeric_value(p)).collect();
            let by_survival = (variable != Variable::Survived).then(|| {
                let mut split = [Vec::new(), Vec::new()];
                for p in view.rows() {
                    if let (Some(flag), Some(v)) = (p.survived, variable.numeric_value(p)) {
                        split[usize::from(flag != 0)].push(v);
                    }
                }
                split
            });
            Distribution::Numeric { values, by_survival }
        }
        VariableKind::Categorical => {
            let by_survival = {
                let mut split: Vec<[usize; 2]> = vec![[0, 0]; counts.len()];
                let mut any = false;
                for p in view.rows() {
                    let (Some(flag), Some(label)) = (p.survived, variable.value_label(p)) else {
                        continue;
                    };
                    if let Some(pos) = counts.iter().position(|(l, _)| *l == label) {
                        split[pos][usize::from(flag != 0)] += 1;
                        any = true;
                    }
                }
                any.then_some(split)
            };
            Distribution::Categorical { by_survival }
        }
    };

    let companion = match (variable, variable.kind()) {
        (Variable::Survived, _) | (_, VariableKind::Categorical) => Companion::Pie,
        (_, VariableKind::Numeric) => {
            let mut groups = [Vec::new(), Vec::new()];
            for p in view.rows() {
                if let (Some(flag), Some(v)) = (p.survived, variable.numeric_value(p)) {
                    groups[usize::from(flag != 0)].push(v);
                }
            }
            Companion::SurvivalBoxes {
                perished: Quartiles::new(&groups[0]),
                survived: Quartiles::new(&groups[1]),
            }
        }
    };

    VariableSummary {
        variable,
        counts,
        dist,
        companion,
    }
}

// ---------------------------------------------------------------------------
// CorrelationGrid – pairwise Pearson over the numeric columns
// ---------------------------------------------------------------------------

/// Symmetric correlation matrix with pairwise-complete observations.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationGrid {
    pub labels: Vec<&'static str>,
    values: Vec<f64>,
}

impl CorrelationGrid {
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Cell value, `None` where too few paired observations existed.
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        let v = self.values[row * self.labels.len() + col];
        (!v.is_nan()).then_some(v)
    }
}

/// Correlate every numeric column pair over the filtered rows.
///
/// `None` when fewer than two columns have at least two observations; the
/// heatmap then shows its insufficient-data placeholder.
pub fn correlation_grid(view: &FilteredView) -> Option<CorrelationGrid> {
    let columns: Vec<Vec<Option<f64>>> = NumericColumn::ALL
        .iter()
        .map(|col| view.rows().map(|p| col.value(p)).collect())
        .collect();

    let usable = columns
        .iter()
        .filter(|c| c.iter().flatten().count() >= 2)
        .count();
    if usable < 2 {
        return None;
    }

    let n = NumericColumn::ALL.len();
    let mut values = vec![f64::NAN; n * n];
    for i in 0..n {
        for j in i..n {
            let mut xs = Vec::new();
            let mut ys = Vec::new();
            for (a, b) in columns[i].iter().zip(&columns[j]) {
                if let (Some(x), Some(y)) = (a, b) {
                    xs.push(*x);
                    ys.push(*y);
                }
            }
            let r = if i == j && xs.len() >= 2 {
                Some(1.0)
            } else {
                pearson(&xs, &ys)
            };
            if let Some(r) = r {
                values[i * n + j] = r;
                values[j * n + i] = r;
            }
        }
    }

    Some(CorrelationGrid {
        labels: NumericColumn::ALL.iter().map(|c| c.label()).collect(),
        values,
    })
}

// ---------------------------------------------------------------------------
// ScatterData – the 3-D view's point cloud
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub age: f64,
    pub fare: f64,
    pub pclass: f64,
    pub survived: u8,
}

/// Complete (Age, Fare, Pclass, Survived) tuples from the filtered rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterData {
    pub points: Vec<ScatterPoint>,
}

impl ScatterData {
    /// Whether enough complete rows exist to draw the 3-D view.
    pub fn is_sufficient(&self) -> bool {
        self.points.len() >= MIN_SCATTER_ROWS
    }
}

pub fn scatter_data(view: &FilteredView) -> ScatterData {
    let points = view
        .rows()
        .filter_map(|p| {
            let (Some(age), Some(fare), Some(pclass), Some(survived)) =
                (p.age, p.fare, p.pclass, p.survived)
            else {
                return None;
            };
            Some(ScatterPoint {
                age,
                fare,
                pclass: f64::from(pclass),
                survived,
            })
        })
        .collect();
    ScatterData { points }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger(
        survived: u8,
        pclass: u8,
        sex: &str,
        age: f64,
        fare: f64,
        embarked: &str,
    ) -> Passenger {
        Passenger {
            survived: Some(survived),
            pclass: Some(pclass),
            sex: Some(sex.to_string()),
            age: Some(age),
            sib_sp: Some(0),
            parch: Some(0),
            fare: Some(fare),
            embarked: Some(embarked.to_string()),
            ..Passenger::default()
        }
    }

    fn view() -> FilteredView {
        let passengers = vec![
            passenger(0, 3, "male", 22.0, 7.25, "S"),
            passenger(1, 1, "female", 38.0, 71.3, "C"),
            passenger(1, 3, "female", 26.0, 7.9, "S"),
            passenger(0, 2, "male", 35.0, 26.0, "S"),
            passenger(1, 1, "female", 54.0, 51.9, "Q"),
            passenger(0, 3, "male", 2.0, 21.1, "S"),
        ];
        let n = passengers.len();
        FilteredView::new(Arc::new(PassengerDataset::new(passengers)), (0..n).collect())
    }

    #[test]
    fn survived_routes_to_histogram_and_pie() {
        let s = summarize(&view(), Variable::Survived);
        assert!(matches!(
            s.dist,
            Distribution::Numeric { by_survival: None, .. }
        ));
        assert!(matches!(s.companion, Companion::Pie));
        assert_eq!(s.counts.len(), 2);
    }

    #[test]
    fn pclass_routes_to_histogram_and_survival_boxes() {
        let s = summarize(&view(), Variable::Pclass);
        assert!(matches!(
            s.dist,
            Distribution::Numeric { by_survival: Some(_), .. }
        ));
        assert!(matches!(s.companion, Companion::SurvivalBoxes { .. }));
    }

    #[test]
    fn sex_and_embarked_route_to_bars_and_pie() {
        for variable in [Variable::Sex, Variable::Embarked] {
            let s = summarize(&view(), variable);
            assert!(matches!(s.dist, Distribution::Categorical { .. }));
            assert!(matches!(s.companion, Companion::Pie));
        }
    }

    #[test]
    fn counts_sort_most_frequent_first() {
        let s = summarize(&view(), Variable::Pclass);
        assert_eq!(
            s.counts,
            vec![
                ("3".to_string(), 3),
                ("1".to_string(), 2),
                ("2".to_string(), 1),
            ]
        );
    }

    #[test]
    fn pie_fractions_sum_to_one() {
        let s = summarize(&view(), Variable::Survived);
        let total: f64 = s.fractions().iter().map(|(_, f)| f).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_view_summarizes_to_empty_artifacts() {
        let empty = FilteredView::new(Arc::new(PassengerDataset::default()), Vec::new());
        let s = summarize(&empty, Variable::Sex);
        assert!(s.counts.is_empty());
        assert!(s.fractions().is_empty());
    }

    #[test]
    fn categorical_split_aligns_with_counts() {
        let s = summarize(&view(), Variable::Sex);
        let Distribution::Categorical { by_survival: Some(split) } = &s.dist else {
            panic!("expected categorical split");
        };
        // female: 3 rows, all survived; male: 3 rows, none survived
        let female = s.counts.iter().position(|(l, _)| l == "female").unwrap();
        let male = s.counts.iter().position(|(l, _)| l == "male").unwrap();
        assert_eq!(split[female], [0, 3]);
        assert_eq!(split[male], [3, 0]);
    }

    #[test]
    fn correlation_grid_is_symmetric_with_unit_diagonal() {
        let grid = correlation_grid(&view()).unwrap();
        let n = grid.size();
        for i in 0..n {
            assert_eq!(grid.value(i, i), Some(1.0));
            for j in 0..n {
                assert_eq!(grid.value(i, j), grid.value(j, i));
            }
        }
    }

    #[test]
    fn correlation_needs_two_usable_columns() {
        let empty = FilteredView::new(Arc::new(PassengerDataset::default()), Vec::new());
        assert!(correlation_grid(&empty).is_none());
    }

    #[test]
    fn scatter_keeps_only_complete_rows() {
        let mut passengers = vec![
            passenger(1, 1, "female", 30.0, 80.0, "C"),
            passenger(0, 3, "male", 40.0, 8.0, "S"),
        ];
        passengers.push(Passenger {
            age: None,
            ..passenger(1, 2, "female", 0.0, 20.0, "S")
        });
        let n = passengers.len();
        let view = FilteredView::new(Arc::new(PassengerDataset::new(passengers)), (0..n).collect());

        let scatter = scatter_data(&view);
        assert_eq!(scatter.points.len(), 2);
        assert!(!scatter.is_sufficient());
    }
}
