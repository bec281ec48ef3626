// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// From the CSV file to the arrays the classifier consumes:
//
//   forestfires.csv
//       │
//       ▼
//   CsvLoader / DatasetProvider → ObservationTable (memoized)
//       │
//       ▼
//   TrainingData                → features [n, 3] + labels [n]
//       │
//       ▼
//   split_train_test            → seeded 80/20 train/test rows

/// Reads the CSV and memoizes the observation table
pub mod loader;

/// Builds feature matrix and derived labels
pub mod preprocessor;

/// Seeded shuffle and train/test split
pub mod splitter;
