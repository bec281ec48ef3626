// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Every failure the library layers can report. The CLI layer
// wraps these in anyhow with extra context; nothing below the
// CLI retries or degrades.
//
//   DataUnavailable  — input CSV missing, unreadable or malformed
//   ModelLoad        — persisted artifact corrupt or unreadable
//   ModelSave        — artifact could not be written
//   Training         — fit / evaluation could not run
//   InputOutOfRange  — slider value outside its bounds
//   Config           — configuration file unreadable or invalid

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FireRiskError {
    #[error("dataset unavailable at '{}': {reason}", .path.display())]
    DataUnavailable { path: PathBuf, reason: String },

    #[error("cannot load model artifact '{}': {reason}", .path.display())]
    ModelLoad { path: PathBuf, reason: String },

    #[error("cannot persist model artifact '{}': {reason}", .path.display())]
    ModelSave { path: PathBuf, reason: String },

    #[error("training failed: {0}")]
    Training(String),

    #[error("{field} must be between {min} and {max}, got {value}")]
    InputOutOfRange {
        field: &'static str,
        min:   u32,
        max:   u32,
        value: u32,
    },

    #[error("invalid configuration '{}': {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl FireRiskError {
    pub fn data_unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::DataUnavailable { path: path.into(), reason: reason.to_string() }
    }

    pub fn model_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ModelLoad { path: path.into(), reason: reason.to_string() }
    }

    pub fn model_save(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ModelSave { path: path.into(), reason: reason.to_string() }
    }
}

pub type Result<T, E = FireRiskError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_path() {
        let err = FireRiskError::data_unavailable("forestfires.csv", "file not found");
        assert_eq!(
            err.to_string(),
            "dataset unavailable at 'forestfires.csv': file not found"
        );
    }

    #[test]
    fn test_out_of_range_message() {
        let err = FireRiskError::InputOutOfRange {
            field: "temperature", min: 0, max: 40, value: 41,
        };
        assert_eq!(err.to_string(), "temperature must be between 0 and 40, got 41");
    }
}
