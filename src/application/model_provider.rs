// ============================================================
// Layer 2 — Model Provider (train-or-load)
// ============================================================
// Supplies the (model, accuracy) pair the rest of the process
// uses.
//
//   artifact missing (cold start):
//     split → fit → score → persist → return trained model
//
//   artifact present (warm start):
//     load → return loaded model; no write on this path
//     accuracy depends on AccuracyPolicy:
//       EvaluateLoaded  score the loaded model on the held-out
//                       rows of the current dataset
//       Retrain         train a throwaway model on the current
//                       dataset and report its score; the
//                       throwaway is never persisted
//
// `get` memoizes the result for the lifetime of the provider;
// `invalidate` clears it. `retrain` always trains and
// overwrites the artifact.

use std::sync::{Arc, OnceLock};

use crate::application::config::AccuracyPolicy;
use crate::data::preprocessor::TrainingData;
use crate::domain::error::Result;
use crate::infra::artifact::ArtifactStore;
use crate::ml::forest::RandomForest;
use crate::ml::trainer::{evaluate, train_and_evaluate, TrainConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelOrigin {
    /// Fitted during this call and written to the artifact path.
    Trained,
    /// Read from the artifact path.
    Loaded,
}

#[derive(Debug)]
pub struct ProvidedModel {
    pub model:    RandomForest,
    /// Held-out accuracy in [0, 1]; see AccuracyPolicy for its source
    /// on the warm path.
    pub accuracy: f64,
    pub origin:   ModelOrigin,
}

pub struct ModelProvider {
    store:    ArtifactStore,
    training: TrainConfig,
    policy:   AccuracyPolicy,
    cache:    OnceLock<Arc<ProvidedModel>>,
}

impl ModelProvider {
    pub fn new(store: ArtifactStore, training: TrainConfig, policy: AccuracyPolicy) -> Self {
        Self { store, training, policy, cache: OnceLock::new() }
    }

    /// Memoized `obtain_model`.
    pub fn get(&self, data: &TrainingData) -> Result<Arc<ProvidedModel>> {
        if let Some(provided) = self.cache.get() {
            return Ok(Arc::clone(provided));
        }
        let provided = Arc::new(self.obtain_model(data)?);
        Ok(Arc::clone(self.cache.get_or_init(|| provided)))
    }

    /// Drop the memoized model; the next `get` runs train-or-load again.
    pub fn invalidate(&mut self) {
        if self.cache.take().is_some() {
            tracing::debug!("Model cache invalidated");
        }
    }

    /// Train-or-load decision, uncached.
    pub fn obtain_model(&self, data: &TrainingData) -> Result<ProvidedModel> {
        if !self.store.exists() {
            tracing::info!(
                "No model artifact at '{}', training a new one",
                self.store.path().display()
            );
            return self.retrain(data);
        }

        let model = self.store.load()?;

        let accuracy = match self.policy {
            AccuracyPolicy::EvaluateLoaded => evaluate(&model, data, &self.training)?,
            AccuracyPolicy::Retrain => {
                let (_throwaway, accuracy) = train_and_evaluate(data, &self.training)?;
                tracing::warn!(
                    "Reported accuracy {:.2}% belongs to a freshly trained model, \
                     not to the artifact loaded from '{}'",
                    accuracy * 100.0,
                    self.store.path().display()
                );
                accuracy
            }
        };

        Ok(ProvidedModel { model, accuracy, origin: ModelOrigin::Loaded })
    }

    /// Train, score and overwrite the artifact.
    pub fn retrain(&self, data: &TrainingData) -> Result<ProvidedModel> {
        let (model, accuracy) = train_and_evaluate(data, &self.training)?;
        self.store.save(&model)?;
        Ok(ProvidedModel { model, accuracy, origin: ModelOrigin::Trained })
    }

    pub fn store(&self) -> &ArtifactStore { &self.store }
}
