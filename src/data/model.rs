use serde::Deserialize;

// ---------------------------------------------------------------------------
// Passenger – one row of the dataset
// ---------------------------------------------------------------------------

/// A single passenger record (one row of the source CSV).
///
/// Every field is optional because the real dataset has holes (most notably
/// `Age`, `Fare` and `Embarked`). Records are immutable once loaded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Passenger {
    #[serde(rename = "PassengerId")]
    pub passenger_id: Option<u32>,
    #[serde(rename = "Survived")]
    pub survived: Option<u8>,
    #[serde(rename = "Pclass")]
    pub pclass: Option<u8>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Sex")]
    pub sex: Option<String>,
    #[serde(rename = "Age")]
    pub age: Option<f64>,
    #[serde(rename = "SibSp")]
    pub sib_sp: Option<u8>,
    #[serde(rename = "Parch")]
    pub parch: Option<u8>,
    #[serde(rename = "Fare")]
    pub fare: Option<f64>,
    #[serde(rename = "Embarked")]
    pub embarked: Option<String>,
}

// ---------------------------------------------------------------------------
// PassengerDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Loaded once at startup, read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct PassengerDataset {
    passengers: Vec<Passenger>,
}

impl PassengerDataset {
    pub fn new(passengers: Vec<Passenger>) -> Self {
        PassengerDataset { passengers }
    }

    /// Number of passenger rows.
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// All rows, in file order.
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Row by index. Indices always come from this crate's own filters.
    pub fn row(&self, index: usize) -> &Passenger {
        &self.passengers[index]
    }
}

// ---------------------------------------------------------------------------
// Variable – the user-selectable column to visualize
// ---------------------------------------------------------------------------

/// How a variable's distribution is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    /// Histogram / boxplot style visuals.
    Numeric,
    /// Count-based visuals (bars, pie).
    Categorical,
}

/// The four columns the sidebar dropdown offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    Survived,
    Pclass,
    Sex,
    Embarked,
}

impl Variable {
    pub const ALL: [Variable; 4] = [
        Variable::Survived,
        Variable::Pclass,
        Variable::Sex,
        Variable::Embarked,
    ];

    /// Column name as it appears in the CSV header.
    pub fn label(self) -> &'static str {
        match self {
            Variable::Survived => "Survived",
            Variable::Pclass => "Pclass",
            Variable::Sex => "Sex",
            Variable::Embarked => "Embarked",
        }
    }

    /// `Survived` and `Pclass` are stored as small integers; `Sex` and
    /// `Embarked` are strings.
    pub fn kind(self) -> VariableKind {
        match self {
            Variable::Survived | Variable::Pclass => VariableKind::Numeric,
            Variable::Sex | Variable::Embarked => VariableKind::Categorical,
        }
    }

    /// The variable's value for a passenger as an `f64`, if present and
    /// numeric.
    pub fn numeric_value(self, p: &Passenger) -> Option<f64> {
        match self {
            Variable::Survived => p.survived.map(f64::from),
            Variable::Pclass => p.pclass.map(f64::from),
            Variable::Sex | Variable::Embarked => None,
        }
    }

    /// The variable's value for a passenger as a display label, if present.
    pub fn value_label(self, p: &Passenger) -> Option<String> {
        match self {
            Variable::Survived => p.survived.map(survival_label).map(str::to_string),
            Variable::Pclass => p.pclass.map(|c| c.to_string()),
            Variable::Sex => p.sex.clone(),
            Variable::Embarked => p.embarked.clone(),
        }
    }
}

/// Display label for a survival flag, shared by pies, legends and the
/// confusion matrix.
pub fn survival_label(flag: u8) -> &'static str {
    if flag == 0 {
        "Did not survive"
    } else {
        "Survived"
    }
}

// ---------------------------------------------------------------------------
// Numeric columns – the correlation / ML feature space
// ---------------------------------------------------------------------------

/// The numeric columns of the dataset, in correlation-matrix order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericColumn {
    Survived,
    Pclass,
    Age,
    SibSp,
    Parch,
    Fare,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 6] = [
        NumericColumn::Survived,
        NumericColumn::Pclass,
        NumericColumn::Age,
        NumericColumn::SibSp,
        NumericColumn::Parch,
        NumericColumn::Fare,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NumericColumn::Survived => "Survived",
            NumericColumn::Pclass => "Pclass",
            NumericColumn::Age => "Age",
            NumericColumn::SibSp => "SibSp",
            NumericColumn::Parch => "Parch",
            NumericColumn::Fare => "Fare",
        }
    }

    pub fn value(self, p: &Passenger) -> Option<f64> {
        match self {
            NumericColumn::Survived => p.survived.map(f64::from),
            NumericColumn::Pclass => p.pclass.map(f64::from),
            NumericColumn::Age => p.age,
            NumericColumn::SibSp => p.sib_sp.map(f64::from),
            NumericColumn::Parch => p.parch.map(f64::from),
            NumericColumn::Fare => p.fare,
        }
    }
}
