// ============================================================
// Layer 4 — Feature / Label Preprocessor
// ============================================================
// Turns the observation table into the arrays the classifier
// trains on:
//
//   features: Array2<f64>  shape [n, 3]
//             columns [temperature, humidity, wind_speed]
//   labels:   Array1<usize> shape [n]
//             1 if burned_area > 0, else 0
//
// Labels are computed here once per table and depend on
// burned_area alone.

use ndarray::{Array1, Array2, Axis};

use crate::data::splitter::split_train_test;
use crate::domain::error::{FireRiskError, Result};
use crate::domain::observation::{ObservationTable, RiskLabel, FEATURE_COUNT};

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingData {
    pub features: Array2<f64>,
    pub labels:   Array1<usize>,
}

impl TrainingData {
    pub fn from_table(table: &ObservationTable) -> Result<Self> {
        let observations = table.observations();

        let flat: Vec<f64> = observations.iter().flat_map(|o| o.features()).collect();
        let features = Array2::from_shape_vec((observations.len(), FEATURE_COUNT), flat)
            .map_err(|e| FireRiskError::Training(format!("feature matrix: {e}")))?;

        let labels = table
            .risk_labels()
            .into_iter()
            .map(RiskLabel::class_index)
            .collect::<Array1<usize>>();

        Ok(Self { features, labels })
    }

    pub fn len(&self) -> usize { self.labels.len() }

    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Rows at `indices`, in that order.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            features: self.features.select(Axis(0), indices),
            labels:   self.labels.select(Axis(0), indices),
        }
    }

    /// Seeded (train, test) split over rows.
    pub fn split(&self, test_fraction: f64, seed: u64) -> (Self, Self) {
        let indices: Vec<usize> = (0..self.len()).collect();
        let (train_idx, test_idx) = split_train_test(indices, test_fraction, seed);
        (self.select(&train_idx), self.select(&test_idx))
    }

    /// Count of high-risk rows.
    pub fn positives(&self) -> usize {
        self.labels.iter().filter(|&&l| l == RiskLabel::High.class_index()).count()
    }
}
