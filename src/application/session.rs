// ============================================================
// Layer 2 — Interactive Session
// ============================================================
// Holds the slider values and the raw-data toggle, and turns
// each user command into one output:
//
//   temp 25 / humidity 30 / wind 12   move a slider
//   predict                            one prediction
//   data                               toggle the raw preview
//   importance                         feature importance chart
//   status                             current inputs + accuracy
//   help / quit
//
// A prediction always sends [temperature, humidity, wind_speed]
// and always reports the probability of HIGH risk, whichever
// label comes out.
//
// Nothing here prints; the CLI layer renders SessionOutput.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::error::FireRiskError;
use crate::domain::inputs::SliderInputs;
use crate::domain::observation::{FeatureName, ObservationTable, RiskLabel};
use crate::domain::traits::RiskClassifier;

/// Rows shown by the raw-data preview.
pub const RAW_PREVIEW_ROWS: usize = 20;

// ─── PredictionResult ────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub label:            RiskLabel,
    /// Probability of RiskLabel::High, even when `label` is Low.
    pub probability_high: f64,
}

impl PredictionResult {
    pub fn message(&self) -> String {
        let pct = self.probability_high * 100.0;
        match self.label {
            RiskLabel::High => format!("🔥 High Fire Risk! Probability: {pct:.2}%"),
            RiskLabel::Low  => format!("✅ Low Fire Risk. Probability: {pct:.2}%"),
        }
    }
}

// ─── SessionCommand ──────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Set(FeatureName, u32),
    Predict,
    ToggleData,
    Importance,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),
    #[error("'{0}' needs a whole-number value, e.g. '{0} 20'")]
    MissingValue(String),
    #[error("'{value}' is not a whole number for '{command}'")]
    BadValue { command: String, value: String },
}

impl FromStr for SessionCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(ParseCommandError::Empty)?.to_ascii_lowercase();

        let feature = match command.as_str() {
            "temp" | "temperature"     => Some(FeatureName::Temperature),
            "humidity" | "rh"          => Some(FeatureName::Humidity),
            "wind" | "wind_speed"      => Some(FeatureName::WindSpeed),
            _ => None,
        };

        if let Some(feature) = feature {
            let raw = words
                .next()
                .ok_or_else(|| ParseCommandError::MissingValue(command.clone()))?;
            let value = raw.parse::<u32>().map_err(|_| ParseCommandError::BadValue {
                command: command.clone(),
                value:   raw.to_string(),
            })?;
            return Ok(SessionCommand::Set(feature, value));
        }

        match command.as_str() {
            "predict" | "p"          => Ok(SessionCommand::Predict),
            "data" | "raw"           => Ok(SessionCommand::ToggleData),
            "importance" | "imp"     => Ok(SessionCommand::Importance),
            "status"                 => Ok(SessionCommand::Status),
            "help" | "?"             => Ok(SessionCommand::Help),
            "quit" | "exit" | "q"    => Ok(SessionCommand::Quit),
            _ => Err(ParseCommandError::Unknown(command)),
        }
    }
}

// ─── SessionOutput ───────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPreview<'a> {
    pub headers: &'a [String],
    pub rows:    &'a [Vec<String>],
}

#[derive(Debug)]
pub enum SessionOutput<'a> {
    Prediction { inputs: SliderInputs, result: PredictionResult },
    InputChanged { feature: FeatureName, value: u32 },
    InputRejected(FireRiskError),
    /// `None` when the toggle was just switched off.
    RawData(Option<RawPreview<'a>>),
    Importances(Vec<(FeatureName, f64)>),
    Status { inputs: SliderInputs, show_data: bool, accuracy: f64 },
    Help,
    Quit,
}

// ─── Session ─────────────────────────────────────────────────────────────────
pub struct Session<'a> {
    classifier: &'a dyn RiskClassifier,
    table:      &'a ObservationTable,
    accuracy:   f64,
    inputs:     SliderInputs,
    show_data:  bool,
}

impl<'a> Session<'a> {
    pub fn new(classifier: &'a dyn RiskClassifier, table: &'a ObservationTable, accuracy: f64) -> Self {
        Self {
            classifier,
            table,
            accuracy,
            inputs:    SliderInputs::default(),
            show_data: false,
        }
    }

    /// One point prediction plus the positive-class probability.
    pub fn on_predict(&self, inputs: &SliderInputs) -> PredictionResult {
        let features = inputs.features();
        let result = PredictionResult {
            label:            self.classifier.predict(&features),
            probability_high: self.classifier.predict_proba(&features),
        };
        tracing::debug!(?features, ?result, "prediction");
        result
    }

    pub fn feature_importances(&self) -> Vec<(FeatureName, f64)> {
        let importances = self.classifier.feature_importances();
        FeatureName::ALL
            .iter()
            .map(|&name| (name, importances[name.index()]))
            .collect()
    }

    pub fn raw_preview(&self) -> RawPreview<'a> {
        RawPreview {
            headers: self.table.headers(),
            rows:    self.table.head(RAW_PREVIEW_ROWS),
        }
    }

    pub fn inputs(&self) -> SliderInputs { self.inputs }

    pub fn show_data(&self) -> bool { self.show_data }

    pub fn accuracy(&self) -> f64 { self.accuracy }

    pub fn dispatch(&mut self, command: SessionCommand) -> SessionOutput<'a> {
        match command {
            SessionCommand::Set(feature, value) => match self.inputs.set(feature, value) {
                Ok(())   => SessionOutput::InputChanged { feature, value },
                Err(err) => SessionOutput::InputRejected(err),
            },
            SessionCommand::Predict => SessionOutput::Prediction {
                inputs: self.inputs,
                result: self.on_predict(&self.inputs),
            },
            SessionCommand::ToggleData => {
                self.show_data = !self.show_data;
                SessionOutput::RawData(self.show_data.then(|| self.raw_preview()))
            }
            SessionCommand::Importance => SessionOutput::Importances(self.feature_importances()),
            SessionCommand::Status => SessionOutput::Status {
                inputs:    self.inputs,
                show_data: self.show_data,
                accuracy:  self.accuracy,
            },
            SessionCommand::Help => SessionOutput::Help,
            SessionCommand::Quit => SessionOutput::Quit,
        }
    }
}
