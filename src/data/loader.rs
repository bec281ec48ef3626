// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// Reads the forest-fire CSV into an ObservationTable and keeps
// it for the lifetime of the process.
//
//   CsvLoader        → one read of the file, typed + raw rows
//   DatasetProvider  → memoizes whatever a source produces;
//                      first get() loads, later calls reuse
//
// Expected input: a header row with at least `temp`, `RH`,
// `wind` and `area`. Other columns are kept for display only.
//
// Any failure (missing file, missing column, non-numeric or
// non-finite cell, no rows) is a DataUnavailable error.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::domain::error::{FireRiskError, Result};
use crate::domain::observation::{Observation, ObservationTable};
use crate::domain::traits::ObservationSource;

/// Columns the classifier reads. Anything else is passed through.
pub const REQUIRED_COLUMNS: [&str; 4] = ["temp", "RH", "wind", "area"];

// ─── CsvLoader ───────────────────────────────────────────────────────────────
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path { &self.path }

    fn unavailable(&self, reason: impl ToString) -> FireRiskError {
        FireRiskError::data_unavailable(self.path.clone(), reason)
    }
}

impl ObservationSource for CsvLoader {
    fn load(&self) -> Result<ObservationTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_path(&self.path)
            .map_err(|e| self.unavailable(e))?;

        let headers: StringRecord = reader.headers().map_err(|e| self.unavailable(e))?.clone();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|col| !headers.iter().any(|h| h == **col))
        {
            return Err(self.unavailable(format!("missing required column '{missing}'")));
        }

        let mut observations = Vec::new();
        let mut raw_rows     = Vec::new();

        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| self.unavailable(e))?;
            // Header is line 1, so data row N sits on line N + 2.
            let observation: Observation = record
                .deserialize(Some(&headers))
                .map_err(|e| self.unavailable(format!("line {}: {e}", row + 2)))?;
            if !observation.features().iter().all(|v| v.is_finite())
                || !observation.burned_area.is_finite()
            {
                return Err(self.unavailable(format!("line {}: non-finite value", row + 2)));
            }

            raw_rows.push(record.iter().map(str::to_string).collect());
            observations.push(observation);
        }

        if observations.is_empty() {
            return Err(self.unavailable("file contains no data rows"));
        }

        tracing::debug!(
            "Parsed {} rows x {} columns from '{}'",
            observations.len(),
            headers.len(),
            self.path.display()
        );

        Ok(ObservationTable::new(
            headers.iter().map(str::to_string).collect(),
            observations,
            raw_rows,
        ))
    }
}

// ─── DatasetProvider ─────────────────────────────────────────────────────────
/// Compute-once cache in front of an ObservationSource.
pub struct DatasetProvider<S> {
    source: S,
    cache:  OnceLock<Arc<ObservationTable>>,
}

impl<S: ObservationSource> DatasetProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source, cache: OnceLock::new() }
    }

    /// The table, loading it on first use. Errors are not cached:
    /// a failed load is retried by the next call.
    pub fn get(&self) -> Result<Arc<ObservationTable>> {
        if let Some(table) = self.cache.get() {
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(self.source.load()?);
        tracing::info!("Loaded dataset: {} observations", table.len());
        Ok(Arc::clone(self.cache.get_or_init(|| table)))
    }

    /// Drop the cached table so the next get() reads the source again.
    pub fn invalidate(&mut self) {
        if self.cache.take().is_some() {
            tracing::debug!("Dataset cache invalidated");
        }
    }

    pub fn source(&self) -> &S { &self.source }
}
