/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   titanic.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → PassengerDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ PassengerDataset  │  Vec<Passenger>, fixed column schema
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply the age range → filtered indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
