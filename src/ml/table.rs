use crate::data::model::Passenger;

// ---------------------------------------------------------------------------
// ML-ready table
// ---------------------------------------------------------------------------

/// Feature columns fed to the classifier, in matrix order.
pub const FEATURE_LABELS: [&str; 5] = ["Pclass", "Age", "SibSp", "Parch", "Fare"];

/// The filtered table restricted to the model columns, rows with any
/// missing value dropped. Label is the survival flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MlTable {
    pub features: Vec<[f64; 5]>,
    pub labels: Vec<u32>,
}

impl MlTable {
    /// Build from passenger rows, keeping only complete ones.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a Passenger>,
    {
        let mut table = MlTable::default();
        for p in rows {
            let (Some(survived), Some(pclass), Some(age), Some(sib_sp), Some(parch), Some(fare)) =
                (p.survived, p.pclass, p.age, p.sib_sp, p.parch, p.fare)
            else {
                continue;
            };
            table.features.push([
                f64::from(pclass),
                age,
                f64::from(sib_sp),
                f64::from(parch),
                fare,
            ]);
            table.labels.push(u32::from(survived));
        }
        table
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_rows_are_dropped() {
        let complete = Passenger {
            survived: Some(1),
            pclass: Some(2),
            age: Some(30.0),
            sib_sp: Some(0),
            parch: Some(0),
            fare: Some(13.0),
            ..Passenger::default()
        };
        let missing_age = Passenger {
            age: None,
            ..complete.clone()
        };
        let missing_fare = Passenger {
            fare: None,
            ..complete.clone()
        };

        let rows = [complete, missing_age, missing_fare];
        let table = MlTable::from_rows(rows.iter());

        assert_eq!(table.len(), 1);
        assert_eq!(table.labels, vec![1]);
        assert_eq!(table.features[0], [2.0, 30.0, 0.0, 0.0, 13.0]);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = MlTable::from_rows(std::iter::empty());
        assert!(table.is_empty());
    }
}
