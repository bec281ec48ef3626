// ============================================================
// Layer 3 — Observations and Risk Labels
// ============================================================
// One row of the forest-fire table, reduced to the four
// columns the classifier needs:
//
//   CSV column   field               role
//   ──────────   ─────────────────   ───────────────
//   temp         temperature         feature 0
//   RH           relative_humidity   feature 1
//   wind         wind_speed          feature 2
//   area         burned_area         label source
//
// The risk label is derived, never stored:
//   High (1) if burned_area > 0, otherwise Low (0).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of classifier inputs.
pub const FEATURE_COUNT: usize = 3;

/// Classifier input in the fixed order [temperature, humidity, wind_speed].
pub type FeatureVector = [f64; FEATURE_COUNT];

// ─── FeatureName ─────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureName {
    Temperature,
    Humidity,
    WindSpeed,
}

impl FeatureName {
    /// All features, in feature-vector order.
    pub const ALL: [FeatureName; FEATURE_COUNT] =
        [FeatureName::Temperature, FeatureName::Humidity, FeatureName::WindSpeed];

    /// Position of this feature inside a FeatureVector.
    pub fn index(self) -> usize {
        match self {
            FeatureName::Temperature => 0,
            FeatureName::Humidity    => 1,
            FeatureName::WindSpeed   => 2,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FeatureName::Temperature => "Temperature",
            FeatureName::Humidity    => "Humidity",
            FeatureName::WindSpeed   => "Wind Speed",
        }
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ─── RiskLabel ───────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLabel {
    Low,
    High,
}

impl RiskLabel {
    /// Label derivation: any burned area at all means high risk.
    pub fn from_burned_area(burned_area: f64) -> Self {
        if burned_area > 0.0 { RiskLabel::High } else { RiskLabel::Low }
    }

    /// Class index used by the classifier (0 = Low, 1 = High).
    pub fn class_index(self) -> usize {
        match self {
            RiskLabel::Low  => 0,
            RiskLabel::High => 1,
        }
    }

    /// Inverse of `class_index`; any non-zero class counts as High.
    pub fn from_class_index(index: usize) -> Self {
        if index == 0 { RiskLabel::Low } else { RiskLabel::High }
    }
}

// ─── Observation ─────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "temp")]
    pub temperature: f64,

    #[serde(rename = "RH")]
    pub relative_humidity: f64,

    #[serde(rename = "wind")]
    pub wind_speed: f64,

    #[serde(rename = "area")]
    pub burned_area: f64,
}

impl Observation {
    pub fn features(&self) -> FeatureVector {
        [self.temperature, self.relative_humidity, self.wind_speed]
    }

    pub fn risk_label(&self) -> RiskLabel {
        RiskLabel::from_burned_area(self.burned_area)
    }
}

// ─── ObservationTable ────────────────────────────────────────────────────────
/// The loaded dataset. Immutable once built.
///
/// Besides the typed observations it keeps every source column
/// as text so the raw-data preview can show the file as it is.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationTable {
    headers:      Vec<String>,
    observations: Vec<Observation>,
    raw_rows:     Vec<Vec<String>>,
}

impl ObservationTable {
    pub fn new(
        headers:      Vec<String>,
        observations: Vec<Observation>,
        raw_rows:     Vec<Vec<String>>,
    ) -> Self {
        debug_assert_eq!(observations.len(), raw_rows.len());
        Self { headers, observations, raw_rows }
    }

    /// Build a table from typed observations only; the raw view
    /// then shows just the four modelled columns.
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        let headers = ["temp", "RH", "wind", "area"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let raw_rows = observations
            .iter()
            .map(|o| {
                vec![
                    o.temperature.to_string(),
                    o.relative_humidity.to_string(),
                    o.wind_speed.to_string(),
                    o.burned_area.to_string(),
                ]
            })
            .collect();
        Self { headers, observations, raw_rows }
    }

    pub fn len(&self) -> usize { self.observations.len() }

    pub fn is_empty(&self) -> bool { self.observations.is_empty() }

    pub fn observations(&self) -> &[Observation] { &self.observations }

    pub fn headers(&self) -> &[String] { &self.headers }

    /// First `n` rows as raw text cells.
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.raw_rows[..n.min(self.raw_rows.len())]
    }

    /// Derived labels, one per observation, in table order.
    pub fn risk_labels(&self) -> Vec<RiskLabel> {
        self.observations.iter().map(Observation::risk_label).collect()
    }
}
