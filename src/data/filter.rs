use super::model::{PassengerDataset, Variable};

// ---------------------------------------------------------------------------
// Filter state – the user-adjustable inputs driving every derived view
// ---------------------------------------------------------------------------

/// The sidebar inputs. `age_min > age_max` is deliberately not validated:
/// an inverted range yields an empty filtered table, and every downstream
/// view falls back to its insufficient-data placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    /// Lower age bound, inclusive (slider 0–100).
    pub age_min: u32,
    /// Upper age bound, inclusive (slider 0–100).
    pub age_max: u32,
    /// Column shown by the distribution views.
    pub variable: Variable,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            age_min: 0,
            age_max: 100,
            variable: Variable::Survived,
        }
    }
}

impl FilterState {
    /// The inputs the age-dependent derived values are keyed on.
    pub fn age_key(&self) -> (u32, u32) {
        (self.age_min, self.age_max)
    }
}

/// Return indices of passengers whose age lies in the inclusive range.
///
/// A passenger without a recorded age never matches the range.
pub fn filtered_indices(dataset: &PassengerDataset, filters: &FilterState) -> Vec<usize> {
    let lo = f64::from(filters.age_min);
    let hi = f64::from(filters.age_max);

    dataset
        .passengers()
        .iter()
        .enumerate()
        .filter(|(_, p)| matches!(p.age, Some(age) if age >= lo && age <= hi))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Passenger;

    fn dataset_with_ages(ages: &[Option<f64>]) -> PassengerDataset {
        let passengers = ages
            .iter()
            .map(|&age| Passenger {
                age,
                ..Passenger::default()
            })
            .collect();
        PassengerDataset::new(passengers)
    }

    fn filters(age_min: u32, age_max: u32) -> FilterState {
        FilterState {
            age_min,
            age_max,
            ..FilterState::default()
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let ds = dataset_with_ages(&[Some(10.0), Some(20.0), Some(30.0)]);
        assert_eq!(filtered_indices(&ds, &filters(10, 30)), vec![0, 1, 2]);
        assert_eq!(filtered_indices(&ds, &filters(11, 29)), vec![1]);
    }

    #[test]
    fn missing_ages_never_match() {
        let ds = dataset_with_ages(&[None, Some(50.0), None]);
        assert_eq!(filtered_indices(&ds, &filters(0, 100)), vec![1]);
    }

    #[test]
    fn narrowing_the_range_never_grows_the_result() {
        let ds = dataset_with_ages(&[
            Some(4.0),
            Some(18.0),
            Some(35.5),
            Some(35.5),
            Some(62.0),
            None,
            Some(80.0),
        ]);

        let mut previous = usize::MAX;
        for (lo, hi) in [(0, 100), (10, 90), (18, 70), (30, 40), (36, 36)] {
            let count = filtered_indices(&ds, &filters(lo, hi)).len();
            assert!(count <= previous, "narrowing ({lo},{hi}) grew the result");
            previous = count;
        }
    }

    #[test]
    fn inverted_range_yields_empty_result() {
        let ds = dataset_with_ages(&[Some(10.0), Some(20.0), Some(30.0)]);
        assert!(filtered_indices(&ds, &filters(60, 10)).is_empty());
    }
}
