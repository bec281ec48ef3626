// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Four subcommands:
//
//   dashboard  accuracy + feature importance (+ raw data)
//   predict    one prediction from three readings
//   train      retrain and overwrite the saved model
//   session    interactive loop: move sliders, predict, toggle data
//
// Global flags pick the files and configuration. Their values
// are folded into AppConfig here so the application layer never
// sees clap types.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::application::config::{AccuracyPolicy, AppConfig};
use crate::domain::error::Result;
use crate::domain::inputs::{HUMIDITY, TEMPERATURE, WIND_SPEED};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show model accuracy and feature importance
    Dashboard(DashboardArgs),

    /// Predict fire risk for one set of weather readings
    Predict(PredictArgs),

    /// Retrain the model and overwrite the saved artifact
    Train,

    /// Interactive session (type 'help' once started)
    Session,
}

/// Flags shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Forest-fire CSV with temp, RH, wind and area columns
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Path of the persisted model artifact
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    /// JSON configuration file; flags override its values
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Where the reported accuracy comes from when a saved model is loaded
    #[arg(long, global = true, value_enum)]
    pub accuracy_policy: Option<AccuracyPolicyArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccuracyPolicyArg {
    /// Score the loaded model on the held-out rows
    EvaluateLoaded,
    /// Report the score of a freshly trained throwaway model
    Retrain,
}

impl From<AccuracyPolicyArg> for AccuracyPolicy {
    fn from(arg: AccuracyPolicyArg) -> Self {
        match arg {
            AccuracyPolicyArg::EvaluateLoaded => AccuracyPolicy::EvaluateLoaded,
            AccuracyPolicyArg::Retrain        => AccuracyPolicy::Retrain,
        }
    }
}

impl GlobalArgs {
    /// Defaults, then the JSON file, then flags.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut cfg = match &self.config {
            Some(path) => AppConfig::from_json_file(path)?,
            None       => AppConfig::default(),
        };
        if let Some(data) = &self.data {
            cfg.data_path = data.clone();
        }
        if let Some(model) = &self.model {
            cfg.artifact_path = model.clone();
        }
        if let Some(policy) = self.accuracy_policy {
            cfg.accuracy_policy = policy.into();
        }
        Ok(cfg)
    }
}

#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Also print the first rows of the dataset
    #[arg(long)]
    pub show_data: bool,
}

/// The three readings, bounded like the dashboard sliders.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Temperature in °C
    #[arg(
        long,
        default_value_t = TEMPERATURE.default,
        value_parser = clap::value_parser!(u32).range(TEMPERATURE.min as i64..=TEMPERATURE.max as i64)
    )]
    pub temperature: u32,

    /// Relative humidity in %
    #[arg(
        long,
        default_value_t = HUMIDITY.default,
        value_parser = clap::value_parser!(u32).range(HUMIDITY.min as i64..=HUMIDITY.max as i64)
    )]
    pub humidity: u32,

    /// Wind speed in km/h
    #[arg(
        long,
        default_value_t = WIND_SPEED.default,
        value_parser = clap::value_parser!(u32).range(WIND_SPEED.min as i64..=WIND_SPEED.max as i64)
    )]
    pub wind: u32,
}
