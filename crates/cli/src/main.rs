use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use stepper_tui::{RecordingCanvas, StepProgress, theme};
use stepper_types::{LayoutMetrics, StepProgressSettings};
use stepper_util::load_settings;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Counts shown when neither a config file nor flags provide any.
const DEMO_STEP_COUNT: u16 = 7;
const DEMO_PROGRESS_COUNT: u16 = 2;

/// Enables logging to stderr in interactive mode.
const LOG_ENV: &str = "STEPPER_LOG";

#[derive(Debug, Parser)]
#[command(name = "stepper", version, about = "Horizontal step progress indicator for the terminal")]
struct Cli {
    /// Settings file (.json, .yaml or .yml)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,
    /// Total number of steps
    #[arg(long, global = true)]
    steps: Option<u16>,
    /// Number of completed steps
    #[arg(long, global = true)]
    progress: Option<u16>,
    /// Theme id or alias (dracula, nord, ansi256)
    #[arg(long, global = true)]
    theme: Option<String>,
    /// Layout metrics preset: terminal or pixel
    #[arg(long, global = true)]
    metrics: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render once and print the rows as plain text
    Render(ViewArgs),
    /// Print the measured layout as JSON
    Measure(ViewArgs),
    /// Print the recorded draw operations as JSON
    Trace(ViewArgs),
}

#[derive(Debug, Args)]
struct ViewArgs {
    /// View width in units
    #[arg(long, short = 'w', default_value_t = 80)]
    width: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.is_some());
    let settings = resolve_settings(&cli)?;

    // No subcommand => interactive demo
    let Some(command) = cli.command else {
        return stepper_tui::run(settings).await;
    };

    let mut widget = build_widget(&settings)?;
    match command {
        Command::Render(args) => {
            for line in widget.render_to_lines(args.width) {
                println!("{line}");
            }
        }
        Command::Measure(args) => {
            widget.measure(args.width);
            let layout = widget.layout().context("layout missing after measure")?;
            println!("{}", serde_json::to_string_pretty(layout)?);
        }
        Command::Trace(args) => {
            widget.measure(args.width);
            let mut canvas = RecordingCanvas::new();
            widget.draw(&mut canvas);
            println!("{}", serde_json::to_string_pretty(&canvas.to_json())?);
        }
    }
    Ok(())
}

/// Headless commands always log to stderr; the interactive demo only does so
/// when `STEPPER_LOG` is set, since output would corrupt the alternate screen.
fn init_tracing(headless: bool) {
    if !headless && std::env::var_os(LOG_ENV).is_none() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Merges the config file with command-line overrides.
fn resolve_settings(cli: &Cli) -> Result<StepProgressSettings> {
    let loaded = load_settings(cli.config.as_deref()).context("failed to load stepper config")?;
    debug!(source = ?loaded.source, "resolved stepper config");
    let mut settings = loaded.settings;
    if loaded.source.is_none() {
        settings.step_count = DEMO_STEP_COUNT;
        settings.progress_count = DEMO_PROGRESS_COUNT;
    }
    if let Some(steps) = cli.steps {
        settings.step_count = steps;
    }
    if let Some(progress) = cli.progress {
        settings.progress_count = progress;
    }
    if let Some(theme) = cli.theme.as_ref() {
        settings.theme = Some(theme.clone());
    }
    if let Some(name) = cli.metrics.as_deref() {
        settings.metrics =
            LayoutMetrics::preset(name).with_context(|| format!("unknown metrics preset '{name}'; expected terminal or pixel"))?;
    }
    Ok(settings)
}

fn build_widget(settings: &StepProgressSettings) -> Result<StepProgress> {
    let loaded = theme::load(settings.theme.as_deref());
    StepProgress::from_settings(settings, loaded.theme.as_ref()).context("invalid step progress style")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use stepper_types::StepCounts;

    fn config_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("stepper.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file(&dir, r#"{"step_count": 4, "progress_count": 1}"#);
        let cli = Cli::try_parse_from(["stepper", "--config", path.to_str().unwrap(), "--progress", "3", "render"]).unwrap();

        let settings = resolve_settings(&cli).unwrap();
        assert_eq!(settings.counts(), StepCounts::new(4, 3));
        assert!(matches!(cli.command, Some(Command::Render(ViewArgs { width: 80 }))));
    }

    #[test]
    fn metrics_preset_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file(&dir, "{}");
        let cli = Cli::try_parse_from(["stepper", "measure", "-w", "300", "--config", path.to_str().unwrap(), "--metrics", "pixel"]).unwrap();

        let settings = resolve_settings(&cli).unwrap();
        assert_eq!(settings.metrics, LayoutMetrics::PIXEL);
    }

    #[test]
    fn unknown_metrics_preset_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file(&dir, "{}");
        let cli = Cli::try_parse_from(["stepper", "--config", path.to_str().unwrap(), "--metrics", "inches"]).unwrap();
        assert!(resolve_settings(&cli).is_err());
    }

    #[test]
    fn headless_render_prints_the_row() {
        let settings = StepProgressSettings {
            step_count: 2,
            progress_count: 2,
            ..StepProgressSettings::default()
        };
        let mut widget = build_widget(&settings).unwrap();
        assert_eq!(widget.render_to_lines(5), ["✔━━━✔"]);
    }
}
