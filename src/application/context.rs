// ============================================================
// Layer 2 — Application Context
// ============================================================
// Wires the two memoized providers together for one process:
//
//   Step 1: DatasetProvider  → ObservationTable   (CSV, once)
//   Step 2: TrainingData     → features + labels  (once)
//   Step 3: ModelProvider    → model + accuracy   (train-or-load, once)
//
// Every CLI command goes through this struct, so a command that
// needs both the table and the model still reads the CSV once.

use std::sync::{Arc, OnceLock};

use crate::application::config::AppConfig;
use crate::application::model_provider::{ModelProvider, ProvidedModel};
use crate::data::loader::{CsvLoader, DatasetProvider};
use crate::data::preprocessor::TrainingData;
use crate::domain::error::Result;
use crate::domain::observation::ObservationTable;
use crate::infra::artifact::ArtifactStore;

pub struct AppContext {
    config:   AppConfig,
    dataset:  DatasetProvider<CsvLoader>,
    training: OnceLock<Arc<TrainingData>>,
    models:   ModelProvider,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let dataset = DatasetProvider::new(CsvLoader::new(config.data_path.clone()));
        let models  = ModelProvider::new(
            ArtifactStore::new(config.artifact_path.clone()),
            config.training,
            config.accuracy_policy,
        );
        Self { config, dataset, training: OnceLock::new(), models }
    }

    pub fn config(&self) -> &AppConfig { &self.config }

    pub fn table(&self) -> Result<Arc<ObservationTable>> {
        self.dataset.get()
    }

    pub fn training_data(&self) -> Result<Arc<TrainingData>> {
        if let Some(data) = self.training.get() {
            return Ok(Arc::clone(data));
        }
        let table = self.table()?;
        let data  = Arc::new(TrainingData::from_table(&table)?);
        tracing::info!(
            "Derived labels: {} high-risk of {} observations",
            data.positives(),
            data.len()
        );
        Ok(Arc::clone(self.training.get_or_init(|| data)))
    }

    /// Train-or-load, memoized.
    pub fn model(&self) -> Result<Arc<ProvidedModel>> {
        let data = self.training_data()?;
        self.models.get(&data)
    }

    /// Force a new training run and overwrite the artifact.
    pub fn retrain(&mut self) -> Result<Arc<ProvidedModel>> {
        let data = self.training_data()?;
        self.models.invalidate();
        let provided = Arc::new(self.models.retrain(&data)?);
        Ok(provided)
    }

    /// Drop every cached value; the next call reloads from disk.
    pub fn invalidate(&mut self) {
        self.dataset.invalidate();
        self.training.take();
        self.models.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::model_provider::ModelOrigin;
    use crate::ml::forest::ForestConfig;
    use crate::test_support::{synthetic_observations, write_csv};

    fn config(dir: &std::path::Path) -> AppConfig {
        let mut cfg = AppConfig {
            data_path:     write_csv(dir, "forestfires.csv", &synthetic_observations(80, 12)),
            artifact_path: dir.join("fire_risk_model.bin"),
            ..AppConfig::default()
        };
        cfg.training.forest = ForestConfig { n_trees: 10, ..ForestConfig::default() };
        cfg
    }

    #[test]
    fn test_full_flow_twice_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());

        let first = AppContext::new(cfg.clone()).model().unwrap();
        assert_eq!(first.origin, ModelOrigin::Trained);
        let bytes = std::fs::read(&cfg.artifact_path).unwrap();

        let second = AppContext::new(cfg.clone()).model().unwrap();
        assert_eq!(second.origin, ModelOrigin::Loaded);
        assert_eq!(std::fs::read(&cfg.artifact_path).unwrap(), bytes);
    }

    #[test]
    fn test_model_is_memoized_within_context() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::new(config(dir.path()));
        assert!(Arc::ptr_eq(&ctx.model().unwrap(), &ctx.model().unwrap()));
        assert!(Arc::ptr_eq(&ctx.table().unwrap(), &ctx.table().unwrap()));
    }

    #[test]
    fn test_invalidate_reloads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = AppContext::new(config(dir.path()));

        let trained = ctx.model().unwrap();
        ctx.invalidate();
        let loaded = ctx.model().unwrap();

        assert!(!Arc::ptr_eq(&trained, &loaded));
        assert_eq!(loaded.origin, ModelOrigin::Loaded);
    }

    #[test]
    fn test_missing_dataset_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig {
            data_path:     dir.path().join("missing.csv"),
            artifact_path: dir.path().join("fire_risk_model.bin"),
            ..AppConfig::default()
        };
        let ctx = AppContext::new(cfg.clone());
        assert!(matches!(
            ctx.model(),
            Err(crate::domain::error::FireRiskError::DataUnavailable { .. })
        ));
        assert!(!cfg.artifact_path.exists());
    }
}
