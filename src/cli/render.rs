// ============================================================
// Layer 1 — Terminal Rendering
// ============================================================
// Turns application results into text. Pure functions: every
// renderer returns a String and the caller decides where it goes.
//
//   header       title + model accuracy
//   importances  horizontal bar chart, one bar per feature
//   table        aligned raw-data preview
//   output       one SessionOutput → text (None means quit)

use std::fmt::Write as _;

use crate::application::model_provider::ModelOrigin;
use crate::application::session::{RawPreview, SessionOutput};
use crate::domain::inputs::{SliderInputs, SliderSpec};
use crate::domain::observation::FeatureName;

pub const TITLE: &str = "🌲🔥 AI-Driven Forest Fire Prediction";

/// Width of a full-length importance bar, in characters.
const BAR_WIDTH: usize = 40;

pub const HELP: &str = "\
Commands:
  temp <0-40>        set temperature (°C)
  humidity <0-100>   set relative humidity (%)
  wind <0-50>        set wind speed (km/h)
  predict            predict fire risk for the current readings
  data               show / hide the first 20 dataset rows
  importance         show feature importance
  status             show current readings
  help               this text
  quit               leave the session";

pub fn header(accuracy: f64, origin: ModelOrigin) -> String {
    let source = match origin {
        ModelOrigin::Trained => "trained this run",
        ModelOrigin::Loaded  => "loaded from disk",
    };
    format!("{TITLE}\nModel Accuracy: {:.2}% ({source})", accuracy * 100.0)
}

pub fn importances(values: &[(FeatureName, f64)]) -> String {
    let label_width = values
        .iter()
        .map(|(name, _)| name.display_name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Feature Importance");
    for (name, value) in values {
        let filled = (value.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
        let _ = write!(
            out,
            "\n  {:<label_width$}  {}{} {:.3}",
            name.display_name(),
            "█".repeat(filled),
            " ".repeat(BAR_WIDTH - filled),
            value,
        );
    }
    out
}

pub fn table(preview: &RawPreview<'_>) -> String {
    let mut widths: Vec<usize> = preview.headers.iter().map(|h| h.chars().count()).collect();
    for row in preview.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:>width$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut out = String::from("Forest Fire Dataset\n");
    out.push_str(&line(preview.headers));
    for row in preview.rows {
        out.push('\n');
        out.push_str(&line(row.as_slice()));
    }
    out
}

fn readings(inputs: &SliderInputs) -> String {
    FeatureName::ALL
        .iter()
        .map(|&f| format!("{} = {}", SliderSpec::for_feature(f).label, inputs.get(f)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text for one session reply; `None` ends the session.
pub fn output(output: &SessionOutput<'_>) -> Option<String> {
    let text = match output {
        SessionOutput::Prediction { inputs, result } => {
            format!("{}\n{}", readings(inputs), result.message())
        }
        SessionOutput::InputChanged { feature, value } => {
            format!("{} set to {value}", SliderSpec::for_feature(*feature).label)
        }
        SessionOutput::InputRejected(err) => format!("Rejected: {err}"),
        SessionOutput::RawData(Some(preview)) => table(preview),
        SessionOutput::RawData(None) => "Raw data hidden".to_string(),
        SessionOutput::Importances(values) => importances(values),
        SessionOutput::Status { inputs, show_data, accuracy } => format!(
            "{}\nModel Accuracy: {:.2}%\nRaw data: {}",
            readings(inputs),
            accuracy * 100.0,
            if *show_data { "shown" } else { "hidden" },
        ),
        SessionOutput::Help => HELP.to_string(),
        SessionOutput::Quit => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::PredictionResult;
    use crate::domain::observation::RiskLabel;

    #[test]
    fn test_header_formats_percent() {
        let text = header(0.85576, ModelOrigin::Loaded);
        assert!(text.starts_with(TITLE));
        assert!(text.contains("Model Accuracy: 85.58% (loaded from disk)"));
    }

    #[test]
    fn test_bars_scale_with_importance() {
        let text = importances(&[
            (FeatureName::Temperature, 0.5),
            (FeatureName::Humidity, 0.25),
            (FeatureName::WindSpeed, 0.25),
        ]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].matches('█').count(), 20);
        assert_eq!(lines[2].matches('█').count(), 10);
        assert!(lines[3].trim_start().starts_with("Wind Speed"));
    }

    #[test]
    fn test_table_aligns_columns() {
        let headers = vec!["temp".to_string(), "area".to_string()];
        let rows    = vec![
            vec!["8.2".to_string(), "0".to_string()],
            vec!["22.75".to_string(), "12.3".to_string()],
        ];
        let text = table(&RawPreview { headers: &headers, rows: &rows });
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], " temp  area");
        assert_eq!(lines[2], "  8.2     0");
        assert_eq!(lines[3], "22.75  12.3");
    }

    #[test]
    fn test_prediction_output_lists_readings() {
        let out = output(&SessionOutput::Prediction {
            inputs: SliderInputs::default(),
            result: PredictionResult { label: RiskLabel::High, probability_high: 0.61 },
        })
        .unwrap();
        assert!(out.contains("Temperature (°C) = 20"));
        assert!(out.contains("Humidity (%) = 50"));
        assert!(out.contains("Wind Speed (km/h) = 10"));
        assert!(out.ends_with("🔥 High Fire Risk! Probability: 61.00%"));
    }

    #[test]
    fn test_quit_has_no_output() {
        assert!(output(&SessionOutput::Quit).is_none());
    }
}
