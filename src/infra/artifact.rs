// ============================================================
// Layer 6 — Model Artifact Store
// ============================================================
// Saves and restores the trained RandomForest as a single
// bincode file at a fixed path.
//
// The file is keyed by its path only: no version, no hash of
// the training data. Whatever sits at the path is what gets
// loaded.
//
//   fire_risk_model.bin   ← bincode-encoded RandomForest
//
// Writes go to a sibling `.tmp` file first and are renamed
// into place, so a crash mid-write never leaves a truncated
// artifact behind. A failed write or rename removes the `.tmp`.
//
// A forest whose input width is not the three weather features
// is rejected on load.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::error::{FireRiskError, Result};
use crate::domain::observation::FEATURE_COUNT;
use crate::ml::forest::RandomForest;

pub struct ArtifactStore {
    path: PathBuf,
}

impl ArtifactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path { &self.path }

    pub fn exists(&self) -> bool { self.path.is_file() }

    /// Serialise `model` and write it to the artifact path.
    pub fn save(&self, model: &RandomForest) -> Result<()> {
        let bytes = bincode::serialize(model)
            .map_err(|e| FireRiskError::model_save(self.path.clone(), e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| FireRiskError::model_save(self.path.clone(), e))?;
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes)
            .and_then(|_| fs::rename(&tmp, &self.path))
            .map_err(|e| {
                let _ = fs::remove_file(&tmp);
                FireRiskError::model_save(self.path.clone(), e)
            })?;

        tracing::info!(
            "Saved model artifact to '{}' ({} bytes)",
            self.path.display(),
            bytes.len()
        );
        Ok(())
    }

    /// Read and deserialise the artifact. Read-only.
    pub fn load(&self) -> Result<RandomForest> {
        let bytes = fs::read(&self.path)
            .map_err(|e| FireRiskError::model_load(self.path.clone(), e))?;

        let model: RandomForest = bincode::deserialize(&bytes)
            .map_err(|e| FireRiskError::model_load(self.path.clone(), e))?;

        if model.n_trees() == 0 {
            return Err(FireRiskError::model_load(self.path.clone(), "artifact holds an empty forest"));
        }
        if model.n_features() != FEATURE_COUNT {
            return Err(FireRiskError::model_load(
                self.path.clone(),
                format!("artifact expects {} features, not {}", model.n_features(), FEATURE_COUNT),
            ));
        }

        tracing::info!(
            "Loaded model artifact from '{}' ({} trees)",
            self.path.display(),
            model.n_trees()
        );
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{Array1, Array2};

    use super::*;
    use crate::data::preprocessor::TrainingData;
    use crate::domain::traits::RiskClassifier;
    use crate::ml::forest::ForestConfig;
    use crate::test_support::synthetic_table;

    fn small_forest() -> RandomForest {
        let data = TrainingData::from_table(&synthetic_table(60, 8)).unwrap();
        let cfg  = ForestConfig { n_trees: 5, ..ForestConfig::default() };
        RandomForest::fit(&data.features, &data.labels, &cfg).unwrap()
    }

    #[test]
    fn test_saved_model_predicts_the_same() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().join("models").join("fire_risk_model.bin"));
        assert!(!store.exists());

        let model = small_forest();
        store.save(&model).unwrap();
        assert!(store.exists());
        assert!(!store.path().with_extension("tmp").exists());

        let loaded = store.load().unwrap();
        for features in [[5.0, 10.0, 3.0], [35.0, 80.0, 40.0]] {
            assert_eq!(loaded.predict_proba(&features), model.predict_proba(&features));
        }
    }

    #[test]
    fn test_corrupt_artifact_is_model_load_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("fire_risk_model.bin");
        fs::write(&path, b"not a model").unwrap();

        assert!(matches!(
            ArtifactStore::new(&path).load(),
            Err(FireRiskError::ModelLoad { .. })
        ));
    }

    #[test]
    fn test_wrong_feature_width_is_model_load_error() {
        let features = Array2::from_shape_fn((20, 5), |(r, c)| (r * 5 + c) as f64);
        let labels   = Array1::from_shape_fn(20, |r| r % 2);
        let cfg      = ForestConfig { n_trees: 3, ..ForestConfig::default() };
        let wide     = RandomForest::fit(&features, &labels, &cfg).unwrap();

        let dir   = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().join("fire_risk_model.bin"));
        store.save(&wide).unwrap();

        match store.load() {
            Err(FireRiskError::ModelLoad { reason, .. }) => {
                assert!(reason.contains("5 features"), "{reason}");
            }
            other => panic!("expected ModelLoad, got {:?}", other.map(|m| m.n_features())),
        }
    }

    #[test]
    fn test_failed_rename_removes_tmp_file() {
        let dir  = tempfile::tempdir().unwrap();
        // A non-empty directory sits where the artifact file should go.
        let path = dir.path().join("fire_risk_model.bin");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"x").unwrap();

        let store = ArtifactStore::new(&path);
        assert!(matches!(store.save(&small_forest()), Err(FireRiskError::ModelSave { .. })));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_unwritable_path_is_model_save_error() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the parent directory should be.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        let store = ArtifactStore::new(blocker.join("fire_risk_model.bin"));
        assert!(matches!(store.save(&small_forest()), Err(FireRiskError::ModelSave { .. })));
    }
}
