use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

use wellscore::burnout::RiskLabel;
use wellscore::export::{self, ExportFormat, ReportEnvelope};
use wellscore::import::ImportManager;
use wellscore::logging::{init_logging, LogLevel};
use wellscore::{
    analyze_files_parallel, generate_report_with, AppConfig, DailySignals, ReportOptions,
    WellnessReport, MIN_ENTRIES,
};

/// WellScore - Weekly wellness scoring CLI
///
/// Turns a week of self-reported mood, stress, sleep and energy into
/// volatility, stress accumulation, burnout risk and emotional battery metrics.
#[derive(Parser)]
#[command(name = "wellscore")]
#[command(author = "WellScore Contributors")]
#[command(version)]
#[command(about = "Wellness scoring CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one file of daily check-ins
    Analyze {
        /// Input file path (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output format (json, text)
        #[arg(short = 'f', long, default_value = "text")]
        format: String,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include the burnout component breakdown
        #[arg(short, long)]
        debug: bool,

        /// Maximum number of burnout reasons
        #[arg(short, long)]
        max_reasons: Option<usize>,
    },

    /// Score many files in parallel
    Batch {
        /// Input files (CSV or JSON)
        #[arg(short, long, num_args = 1.., required = true)]
        input: Vec<PathBuf>,

        /// Write one JSON report per input into this directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Score the built-in calibration weeks
    Demo {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        /// Print the effective configuration
        #[arg(short, long)]
        show: bool,

        /// Write a default configuration file
        #[arg(short, long)]
        init: bool,

        /// Overwrite an existing file with --init
        #[arg(long)]
        force: bool,

        /// Check the configuration for suspicious values
        #[arg(long)]
        validate: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (app_config, initialized) = prepare_config(&cli)?;

    let mut log_config = app_config.logging.clone();
    log_config.level = LogLevel::from_verbosity(log_config.level, cli.verbose);
    init_logging(&log_config)?;

    if let Some(path) = &initialized {
        println!(
            "{} {}",
            "✓ Wrote default configuration to".green(),
            path.display()
        );
    }

    match cli.command {
        Commands::Analyze {
            input,
            format,
            output,
            debug,
            max_reasons,
        } => {
            let format: ExportFormat = format.parse()?;
            let options = ReportOptions {
                max_reasons: max_reasons.unwrap_or(app_config.report.max_reasons),
                debug: debug || app_config.report.debug,
            };
            run_analyze(&app_config, &input, format, output.as_deref(), options)?;
        }

        Commands::Batch { input, output_dir } => {
            run_batch(&app_config, &input, output_dir.as_deref())?;
        }

        Commands::Demo { json } => {
            let format = if json {
                ExportFormat::Json
            } else {
                ExportFormat::Text
            };
            for (name, signals) in demo_cases() {
                let report = generate_report_with(&signals, &app_config.scoring, app_config.report);
                let envelope = ReportEnvelope::new(format!("demo:{}", name), signals.days(), report);
                println!("{}", format!("Case {}", name).cyan().bold());
                println!("{}", export::render(&envelope, format)?);
            }
        }

        Commands::Config {
            show,
            init,
            validate,
            ..
        } => {
            run_config(&app_config, show || !(init || validate), validate)?;
        }
    }

    Ok(())
}

/// Load the effective configuration
///
/// `config --init` writes the file first, so an explicit `-c` path that does
/// not exist yet is created rather than read.
fn prepare_config(cli: &Cli) -> Result<(AppConfig, Option<PathBuf>)> {
    let initialized = match &cli.command {
        Commands::Config {
            init: true, force, ..
        } => Some(AppConfig::init_file(cli.config.as_deref(), *force)?),
        _ => None,
    };

    let config_path = initialized.as_deref().or(cli.config.as_deref());
    let app_config = AppConfig::resolve(config_path)?;
    Ok((app_config, initialized))
}

fn run_analyze(
    app_config: &AppConfig,
    input: &Path,
    format: ExportFormat,
    output: Option<&Path>,
    options: ReportOptions,
) -> Result<()> {
    let signals = ImportManager::new()
        .import_file(input)
        .with_context(|| format!("Failed to import {}", input.display()))?;
    signals.validate(MIN_ENTRIES)?;

    let report = generate_report_with(&signals, &app_config.scoring, options);
    let label = report.metrics.burnout_risk.burnout_risk_label;
    let envelope = ReportEnvelope::new(input.display().to_string(), signals.days(), report);

    match output {
        Some(path) => {
            export::export_report(&envelope, format, path)?;
            println!(
                "{} {} ({})",
                "✓ Report written to".green(),
                path.display(),
                colored_label(label)
            );
        }
        None => {
            println!("{}", export::render(&envelope, format)?);
        }
    }

    Ok(())
}

fn run_batch(app_config: &AppConfig, inputs: &[PathBuf], output_dir: Option<&Path>) -> Result<()> {
    println!(
        "{}",
        format!("Scoring {} files...", inputs.len()).blue().bold()
    );

    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let summary = analyze_files_parallel(inputs, &app_config.scoring, &app_config.report);

    for file in &summary.results {
        match &file.result {
            Ok(report) => {
                println!(
                    "  {} {} {:>6.2} {}",
                    "✓".green(),
                    file.file_path.display(),
                    report.metrics.burnout_risk.burnout_risk_score,
                    colored_label(report.metrics.burnout_risk.burnout_risk_label)
                );
                if let Some(dir) = output_dir {
                    write_batch_report(dir, &file.file_path, file.days, report)?;
                }
            }
            Err(e) => {
                println!(
                    "  {} {}: {}",
                    "✗".red(),
                    file.file_path.display(),
                    e.user_message()
                );
            }
        }
    }

    println!(
        "{}",
        format!(
            "{} succeeded, {} failed in {}ms",
            summary.successful(),
            summary.failed(),
            summary.total_duration_ms
        )
        .dimmed()
    );

    if !summary.is_fully_successful() {
        bail!("{} of {} files failed", summary.failed(), summary.results.len());
    }
    Ok(())
}

fn write_batch_report(
    dir: &Path,
    input: &Path,
    days: usize,
    report: &WellnessReport,
) -> Result<()> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    let envelope = ReportEnvelope::new(input.display().to_string(), days, report.clone());
    export::export_report(&envelope, ExportFormat::Json, dir.join(format!("{}.json", stem)))?;
    Ok(())
}

fn run_config(app_config: &AppConfig, show: bool, validate: bool) -> Result<()> {
    if validate {
        let warnings = app_config.scoring.validate();
        if warnings.is_empty() {
            println!("{}", "✓ Configuration looks good".green());
        } else {
            for warning in &warnings {
                println!("  {} {}", "!".yellow().bold(), warning);
            }
        }
        app_config.scoring.strict_validate()?;
    }

    if show {
        println!("{}", toml::to_string_pretty(app_config)?);
    }

    Ok(())
}

fn colored_label(label: RiskLabel) -> ColoredString {
    let text = label.to_string();
    match label {
        RiskLabel::Green => text.green().bold(),
        RiskLabel::Yellow => text.yellow().bold(),
        RiskLabel::Red => text.red().bold(),
    }
}

/// Calibration weeks: stable, mildly strained and high risk
fn demo_cases() -> Vec<(&'static str, DailySignals)> {
    vec![
        (
            "A (stable)",
            DailySignals::new(
                vec![7.0, 7.0, 6.5, 7.0, 7.5, 7.0, 7.0],
                vec![2.0, 2.0, 3.0, 2.0, 2.0, 3.0, 2.0],
                vec![8.0, 8.0, 8.0, 7.5, 8.0, 8.0, 8.0],
                vec![8.0, 8.0, 7.5, 8.0, 8.0, 7.5, 8.0],
            ),
        ),
        (
            "B (mild strain)",
            DailySignals::new(
                vec![6.0, 6.0, 5.5, 6.0, 5.0, 5.5, 5.0],
                vec![5.0, 5.0, 6.0, 5.0, 6.0, 6.0, 5.0],
                vec![6.5, 6.0, 6.0, 6.5, 6.0, 6.0, 6.0],
                vec![6.0, 6.0, 5.5, 6.0, 5.5, 5.0, 5.5],
            ),
        ),
        (
            "C (high risk)",
            DailySignals::new(
                vec![1.0, 5.5, 5.0, 4.0, 3.5, 3.0, 2.5],
                vec![8.0, 8.5, 9.0, 8.5, 9.0, 9.0, 8.5],
                vec![4.5, 1.0, 4.0, 1.0, 4.0, 4.0, 4.5],
                vec![4.0, 3.5, 3.0, 3.0, 1.0, 2.0, 2.0],
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_with_new_explicit_path() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("home").join("new.toml");
        let path_arg = path.to_str().unwrap();

        let cli = Cli::try_parse_from(["wellscore", "-c", path_arg, "config", "--init"]).unwrap();
        let (config, initialized) = prepare_config(&cli).unwrap();

        assert!(path.exists());
        assert_eq!(initialized.as_deref(), Some(path.as_path()));
        assert_eq!(config.report, ReportOptions::default());

        // A second init without --force leaves the file alone
        let cli = Cli::try_parse_from(["wellscore", "-c", path_arg, "config", "--init"]).unwrap();
        assert!(prepare_config(&cli).is_err());
    }

    #[test]
    fn test_missing_explicit_path_outside_init_is_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("absent.toml");

        let cli =
            Cli::try_parse_from(["wellscore", "-c", path.to_str().unwrap(), "config", "--show"])
                .unwrap();
        assert!(prepare_config(&cli).is_err());
        assert!(!path.exists());
    }
}
