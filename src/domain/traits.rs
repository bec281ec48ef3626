// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits, not
// against the CSV loader or the random forest directly:
//
//   ObservationSource — CsvLoader (and in-memory test sources)
//   RiskClassifier    — RandomForest (and stub classifiers in tests)

use crate::domain::error::Result;
use crate::domain::observation::{FeatureVector, ObservationTable, RiskLabel};

// ─── ObservationSource ───────────────────────────────────────────────────────
/// Anything that can produce the observation table.
pub trait ObservationSource {
    fn load(&self) -> Result<ObservationTable>;
}

// ─── RiskClassifier ──────────────────────────────────────────────────────────
/// A trained model mapping [temperature, humidity, wind_speed]
/// to a risk label.
pub trait RiskClassifier {
    /// Point prediction for one row.
    fn predict(&self, features: &FeatureVector) -> RiskLabel;

    /// Probability of `RiskLabel::High` for one row, in [0, 1].
    fn predict_proba(&self, features: &FeatureVector) -> f64;

    /// Relative importance of each input, in feature-vector order.
    fn feature_importances(&self) -> FeatureVector;
}
