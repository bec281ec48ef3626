// ============================================================
// Layer 5 — Random Forest Classifier
// ============================================================
// An ensemble of linfa-trees DecisionTrees, each fitted on a
// bootstrap sample (n rows drawn with replacement) of the
// training set.
//
//   predict_proba = share of trees voting class 1
//   predict       = 1 if that share is above 0.5, else 0
//   importances   = per-tree impurity decrease, normalised per
//                   tree, averaged, then normalised to sum to 1
//
// All randomness comes from one StdRng seeded by ForestConfig,
// so the same data and config always give the same forest.
//
// The whole struct is serde-serialisable; the artifact store
// writes it to disk as-is.

use std::fmt;

use linfa::prelude::*;
use linfa::Dataset;
use linfa_trees::DecisionTree;
use ndarray::{arr2, Array1, Array2, Axis};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::domain::error::{FireRiskError, Result};
use crate::domain::observation::{FeatureVector, RiskLabel, FEATURE_COUNT};
use crate::domain::traits::RiskClassifier;

const POSITIVE_CLASS: usize = 1;

// ─── ForestConfig ────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    /// Number of trees in the ensemble
    pub n_trees:   usize,
    /// Depth limit per tree; None grows until leaves are pure
    pub max_depth: Option<usize>,
    /// Seed for bootstrap sampling and the train/test split
    pub seed:      u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self { n_trees: 100, max_depth: None, seed: 42 }
    }
}

// ─── RandomForest ────────────────────────────────────────────────────────────
#[derive(Serialize, Deserialize)]
pub struct RandomForest {
    trees:      Vec<DecisionTree<f64, usize>>,
    n_features: usize,
}

impl RandomForest {
    pub fn fit(features: &Array2<f64>, labels: &Array1<usize>, cfg: &ForestConfig) -> Result<Self> {
        let n_rows = features.nrows();
        if n_rows == 0 {
            return Err(FireRiskError::Training("cannot fit a forest on zero rows".into()));
        }
        if n_rows != labels.len() {
            return Err(FireRiskError::Training(format!(
                "{} feature rows but {} labels", n_rows, labels.len()
            )));
        }
        if cfg.n_trees == 0 {
            return Err(FireRiskError::Training("n_trees must be at least 1".into()));
        }

        let mut rng   = StdRng::seed_from_u64(cfg.seed);
        let mut trees = Vec::with_capacity(cfg.n_trees);

        for _ in 0..cfg.n_trees {
            let bootstrap: Vec<usize> = (0..n_rows).map(|_| rng.gen_range(0..n_rows)).collect();
            let sample = Dataset::new(
                features.select(Axis(0), &bootstrap),
                labels.select(Axis(0), &bootstrap),
            );

            let tree = DecisionTree::<f64, usize>::params()
                .max_depth(cfg.max_depth)
                .fit(&sample)
                .map_err(training_error)?;
            trees.push(tree);
        }

        tracing::debug!(
            "Fitted {} trees on {} rows ({} features)",
            trees.len(), n_rows, features.ncols()
        );

        Ok(Self { trees, n_features: features.ncols() })
    }

    pub fn n_trees(&self) -> usize { self.trees.len() }

    pub fn n_features(&self) -> usize { self.n_features }

    /// Share of trees voting for the positive class, per row.
    pub fn positive_share(&self, features: &Array2<f64>) -> Array1<f64> {
        let mut votes = Array1::<f64>::zeros(features.nrows());
        for tree in &self.trees {
            let predicted: Array1<usize> = tree.predict(features);
            votes.zip_mut_with(&predicted, |v, &p| {
                if p == POSITIVE_CLASS { *v += 1.0; }
            });
        }
        votes / self.trees.len() as f64
    }

    /// Majority-vote class per row.
    pub fn predict_rows(&self, features: &Array2<f64>) -> Array1<usize> {
        self.positive_share(features)
            .mapv(|share| if share > 0.5 { POSITIVE_CLASS } else { 0 })
    }
}

fn training_error(err: impl fmt::Display) -> FireRiskError {
    FireRiskError::Training(err.to_string())
}

impl RiskClassifier for RandomForest {
    fn predict(&self, features: &FeatureVector) -> RiskLabel {
        let class = self.predict_rows(&arr2(&[*features]))[0];
        RiskLabel::from_class_index(class)
    }

    fn predict_proba(&self, features: &FeatureVector) -> f64 {
        self.positive_share(&arr2(&[*features]))[0]
    }

    fn feature_importances(&self) -> FeatureVector {
        let mut importances = [0.0; FEATURE_COUNT];

        for tree in &self.trees {
            let per_tree = tree.feature_importance();
            let total: f64 = per_tree.iter().sum();
            if total.is_nan() || total <= 0.0 {
                // single-leaf tree, no split to credit
                continue;
            }
            for (acc, value) in importances.iter_mut().zip(per_tree.iter()) {
                *acc += value / total;
            }
        }

        let total: f64 = importances.iter().sum();
        if total > 0.0 {
            importances.iter_mut().for_each(|v| *v /= total);
        }
        importances
    }
}

impl fmt::Debug for RandomForest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomForest")
            .field("n_trees", &self.trees.len())
            .field("n_features", &self.n_features)
            .finish()
    }
}
