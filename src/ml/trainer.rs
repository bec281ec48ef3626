// ============================================================
// Layer 5 — Train / Evaluate
// ============================================================
// One training cycle, start to finish:
//
//   1. seeded train/test split (test = ceil(20%) by default)
//   2. fit a RandomForest on the training rows
//   3. predict the test rows
//   4. accuracy = correct predictions / test rows
//
// `evaluate` runs steps 1, 3 and 4 only, scoring an existing
// model against the same held-out rows.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::data::preprocessor::TrainingData;
use crate::domain::error::{FireRiskError, Result};
use crate::ml::forest::{ForestConfig, RandomForest};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Share of rows held out for scoring, in (0, 1)
    pub test_fraction: f64,
    pub forest:        ForestConfig,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self { test_fraction: 0.2, forest: ForestConfig::default() }
    }
}

/// Fit on the training split and score on the test split.
pub fn train_and_evaluate(data: &TrainingData, cfg: &TrainConfig) -> Result<(RandomForest, f64)> {
    let (train, test) = holdout(data, cfg)?;

    tracing::info!(
        "Training random forest: {} trees, {} train rows, {} test rows",
        cfg.forest.n_trees, train.len(), test.len()
    );

    let model    = RandomForest::fit(&train.features, &train.labels, &cfg.forest)?;
    let accuracy = accuracy_score(&model.predict_rows(&test.features), &test.labels);

    tracing::info!("Test accuracy: {:.2}%", accuracy * 100.0);
    Ok((model, accuracy))
}

/// Score `model` on the held-out rows `cfg` selects, without training.
pub fn evaluate(model: &RandomForest, data: &TrainingData, cfg: &TrainConfig) -> Result<f64> {
    let (_, test) = holdout(data, cfg)?;
    let accuracy  = accuracy_score(&model.predict_rows(&test.features), &test.labels);
    tracing::debug!("Evaluated model on {} held-out rows: {:.4}", test.len(), accuracy);
    Ok(accuracy)
}

/// Fraction of positions where `predicted` equals `truth`.
/// Empty input scores 0.
pub fn accuracy_score(predicted: &Array1<usize>, truth: &Array1<usize>) -> f64 {
    if truth.is_empty() {
        return 0.0;
    }
    let correct = predicted
        .iter()
        .zip(truth.iter())
        .filter(|(p, t)| p == t)
        .count();
    correct as f64 / truth.len() as f64
}

fn holdout(data: &TrainingData, cfg: &TrainConfig) -> Result<(TrainingData, TrainingData)> {
    if !(cfg.test_fraction > 0.0 && cfg.test_fraction < 1.0) {
        return Err(FireRiskError::Training(format!(
            "test_fraction must be in (0, 1), got {}", cfg.test_fraction
        )));
    }
    if data.len() < 2 {
        return Err(FireRiskError::Training(format!(
            "need at least 2 rows to split, got {}", data.len()
        )));
    }
    Ok(data.split(cfg.test_fraction, cfg.forest.seed))
}
