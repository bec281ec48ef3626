// ============================================================
// Layer 2 — Application Configuration
// ============================================================
// Everything a run needs to know, with defaults matching the
// fixed constants of the dashboard:
//
//   data_path        forestfires.csv
//   artifact_path    fire_risk_model.bin
//   accuracy_policy  evaluate-loaded
//   training         20% test split, seed 42, 100 trees
//
// Precedence: defaults → JSON file (--config) → CLI flags.
// The CLI layer applies the flags; this layer never sees clap.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::domain::error::{FireRiskError, Result};
use crate::ml::trainer::TrainConfig;

/// Where the reported accuracy comes from when a persisted
/// artifact is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccuracyPolicy {
    /// Score the loaded model on the held-out rows.
    #[default]
    EvaluateLoaded,
    /// Train a throwaway model and report its score next to the
    /// loaded one. The figure may not describe the model in use.
    Retrain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_path:       PathBuf,
    pub artifact_path:   PathBuf,
    pub accuracy_policy: AccuracyPolicy,
    pub training:        TrainConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path:       PathBuf::from("forestfires.csv"),
            artifact_path:   PathBuf::from("fire_risk_model.bin"),
            accuracy_policy: AccuracyPolicy::default(),
            training:        TrainConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read a JSON config. Missing keys fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| FireRiskError::Config {
            path:   path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let cfg: AppConfig = serde_json::from_str(&json).map_err(|e| FireRiskError::Config {
            path:   path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!("Loaded configuration from '{}'", path.display());
        Ok(cfg)
    }
}
