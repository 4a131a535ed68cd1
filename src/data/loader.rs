use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use thiserror::Error;

use super::model::{Passenger, PassengerDataset};

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Columns the dashboard cannot function without. Extra columns in the file
/// (`Ticket`, `Cabin`, …) are ignored by the record deserializer.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Survived", "Pclass", "Sex", "Age", "SibSp", "Parch", "Fare", "Embarked",
];

/// Structural problems with the dataset file. Any of these is fatal at
/// startup: the process cannot serve a session without the dataset.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("dataset contains no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the passenger dataset from a CSV file.
pub fn load_file(path: &Path) -> Result<PassengerDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening dataset file {}", path.display()))?;
    read_csv(file).with_context(|| format!("reading dataset {}", path.display()))
}

/// Parse a passenger dataset from any CSV reader.
///
/// The header row must contain every column in [`REQUIRED_COLUMNS`]; a
/// malformed row aborts the load (the file is fixed configuration, so a bad
/// row means a bad deployment, not bad user input).
pub fn read_csv<R: Read>(reader: R) -> Result<PassengerDataset> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(SchemaError::MissingColumn(required).into());
        }
    }

    let mut passengers = Vec::new();
    for (row_no, result) in csv_reader.deserialize::<Passenger>().enumerate() {
        let passenger = result.with_context(|| format!("CSV row {row_no}"))?;
        passengers.push(passenger);
    }

    if passengers.is_empty() {
        bail!(SchemaError::Empty);
    }

    Ok(PassengerDataset::new(passengers))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Fare,Embarked";

    #[test]
    fn parses_rows_and_missing_fields() {
        let csv = format!(
            "{HEADER}\n\
             1,0,3,\"Braund, Mr. Owen\",male,22,1,0,7.25,S\n\
             2,1,1,\"Cumings, Mrs. John\",female,38,1,0,71.2833,C\n\
             3,1,3,\"Moran, Mr. James\",male,,0,0,8.4583,Q\n"
        );
        let dataset = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);

        let third = dataset.row(2);
        assert_eq!(third.age, None);
        assert_eq!(third.survived, Some(1));
        assert_eq!(third.embarked.as_deref(), Some("Q"));
    }

    #[test]
    fn missing_required_column_is_rejected() {
        let csv = "PassengerId,Survived,Pclass,Name,Sex,SibSp,Parch,Fare,Embarked\n\
                   1,0,3,X,male,1,0,7.25,S\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        let schema = err.downcast_ref::<SchemaError>().expect("schema error");
        assert!(matches!(schema, SchemaError::MissingColumn("Age")));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let csv = format!("{HEADER}\n");
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(err.downcast_ref::<SchemaError>().is_some());
    }

    #[test]
    fn malformed_row_aborts_the_load() {
        let csv = format!(
            "{HEADER}\n\
             1,0,3,X,male,not-a-number,1,0,7.25,S\n"
        );
        assert!(read_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = format!(
            "{HEADER},Ticket,Cabin\n\
             1,1,2,X,female,30,0,0,13.0,S,PC 17599,C85\n"
        );
        let dataset = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(dataset.row(0).fare, Some(13.0));
    }
}
