// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, builds the AppContext, routes the subcommand and prints
// whatever the application layer returns.
//
//   dashboard  header + importance chart (+ raw rows)
//   predict    one prediction, then exit
//   train      retrain, overwrite the artifact, print accuracy
//   session    read commands from stdin until 'quit' or EOF

pub mod commands;

pub mod render;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::application::context::AppContext;
use crate::application::session::{Session, SessionCommand};
use crate::domain::inputs::SliderInputs;
use commands::{Commands, DashboardArgs, GlobalArgs, PredictArgs};

#[derive(Parser, Debug)]
#[command(
    name = "fire-risk",
    version,
    about = "Predict forest fire risk from temperature, humidity and wind speed."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = self.global.resolve().context("Failed to resolve configuration")?;
        tracing::debug!(?config, "configuration");
        let mut ctx = AppContext::new(config);

        match self.command {
            Commands::Dashboard(args) => run_dashboard(&ctx, &args),
            Commands::Predict(args)   => run_predict(&ctx, &args),
            Commands::Train           => run_train(&mut ctx),
            Commands::Session         => run_session(&ctx),
        }
    }
}

fn run_dashboard(ctx: &AppContext, args: &DashboardArgs) -> Result<()> {
    let table    = ctx.table().context("Failed to load the forest-fire dataset")?;
    let provided = ctx.model().context("Failed to obtain the fire-risk model")?;
    let session  = Session::new(&provided.model, table.as_ref(), provided.accuracy);

    println!("{}", render::header(provided.accuracy, provided.origin));
    println!();
    println!("{}", render::importances(&session.feature_importances()));

    if args.show_data {
        println!();
        println!("{}", render::table(&session.raw_preview()));
    }
    Ok(())
}

fn run_predict(ctx: &AppContext, args: &PredictArgs) -> Result<()> {
    let inputs   = SliderInputs::new(args.temperature, args.humidity, args.wind)?;
    let table    = ctx.table().context("Failed to load the forest-fire dataset")?;
    let provided = ctx.model().context("Failed to obtain the fire-risk model")?;
    let session  = Session::new(&provided.model, table.as_ref(), provided.accuracy);

    println!("{}", session.on_predict(&inputs).message());
    Ok(())
}

fn run_train(ctx: &mut AppContext) -> Result<()> {
    let path = ctx.config().artifact_path.clone();
    let provided = ctx.retrain().context("Training failed")?;

    println!(
        "Model saved to '{}'. Accuracy: {:.2}%",
        path.display(),
        provided.accuracy * 100.0
    );
    Ok(())
}

fn run_session(ctx: &AppContext) -> Result<()> {
    let table    = ctx.table().context("Failed to load the forest-fire dataset")?;
    let provided = ctx.model().context("Failed to obtain the fire-risk model")?;
    let mut session = Session::new(&provided.model, table.as_ref(), provided.accuracy);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", render::header(provided.accuracy, provided.origin))?;
    writeln!(stdout, "{}", render::importances(&session.feature_importances()))?;
    writeln!(stdout, "Type 'help' for commands.")?;

    session_loop(&mut session, stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Read one command per line and print its rendered result.
/// Stops on 'quit' or end of input.
fn session_loop<R: BufRead, W: Write>(session: &mut Session<'_>, mut input: R, out: &mut W) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<SessionCommand>() {
            Ok(command) => match render::output(&session.dispatch(command)) {
                Some(text) => writeln!(out, "{text}")?,
                None       => return Ok(()),
            },
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::data::preprocessor::TrainingData;
    use crate::ml::forest::{ForestConfig, RandomForest};
    use crate::test_support::synthetic_table;

    fn run_script(script: &str) -> String {
        let table  = synthetic_table(100, 21);
        let data   = TrainingData::from_table(&table).unwrap();
        let cfg    = ForestConfig { n_trees: 10, ..ForestConfig::default() };
        let forest = RandomForest::fit(&data.features, &data.labels, &cfg).unwrap();
        let mut session = Session::new(&forest, &table, 0.9);

        let mut out = Vec::new();
        session_loop(&mut session, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_session_predicts_after_slider_moves() {
        let out = run_script("humidity 10\nwind 45\npredict\nquit\npredict\n");
        assert!(out.contains("Humidity (%) set to 10"));
        assert!(out.contains("Wind Speed (km/h) = 45"));
        assert!(out.contains("Fire Risk"));
        // Nothing after 'quit' runs.
        assert_eq!(out.matches("Probability:").count(), 1);
    }

    #[test]
    fn test_session_reports_bad_input_and_continues() {
        let out = run_script("temp 99\nfly\nstatus\n");
        assert!(out.contains("Rejected: temperature must be between 0 and 40, got 99"));
        assert!(out.contains("unknown command 'fly'"));
        assert!(out.contains("Temperature (°C) = 20"));
    }

    #[test]
    fn test_session_toggles_raw_data() {
        let out = run_script("data\ndata\n");
        assert!(out.contains("Forest Fire Dataset"));
        assert!(out.contains("Raw data hidden"));
    }

    #[test]
    fn test_cli_parses_predict_bounds() {
        let cli = Cli::try_parse_from(["fire-risk", "predict", "--temperature", "40", "--humidity", "0"]).unwrap();
        match cli.command {
            Commands::Predict(args) => {
                assert_eq!((args.temperature, args.humidity, args.wind), (40, 0, 10));
            }
            other => panic!("unexpected command {other:?}"),
        }

        assert!(Cli::try_parse_from(["fire-risk", "predict", "--temperature", "41"]).is_err());
        assert!(Cli::try_parse_from(["fire-risk", "predict", "--wind", "51"]).is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fire-risk", "dashboard", "--show-data", "--model", "m.bin", "--accuracy-policy", "retrain",
        ])
        .unwrap();
        assert_eq!(cli.global.model.as_deref(), Some(std::path::Path::new("m.bin")));
        assert_eq!(cli.global.accuracy_policy, Some(commands::AccuracyPolicyArg::Retrain));
        assert!(matches!(cli.command, Commands::Dashboard(DashboardArgs { show_data: true })));
    }
}
