//! Resume scorer: resume scoring and job description matching tool

use clap::Parser;
use colored::Colorize;
use log::{error, info, warn};
use resume_scorer::cli::{self, Cli, Commands, ConfigAction};
use resume_scorer::config::{Config, OutputFormat};
use resume_scorer::input::InputManager;
use resume_scorer::output::formatter::{save_report_to_file, suggest_filename};
use resume_scorer::output::{ReportGenerator, ScoringReport};
use resume_scorer::processing::text_processor::TextNormalizer;
use resume_scorer::{JobMatcher, Result, ResumeAnalyzer, ResumeScorerError};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        // a broken config file must not block `config reset`
        Err(e) if matches!(cli.command, Commands::Config { .. }) => {
            warn!("Failed to load configuration, showing defaults: {}", e);
            Config::default()
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            output,
            detailed,
            save,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            info!("Starting resume analysis for {}", resume.display());

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;

            let started = Instant::now();
            let analyzer = ResumeAnalyzer::new(&config);
            let outcome = analyzer.analyze_resume(&resume_text);
            let report = ScoringReport::from_analysis(outcome, &resume.to_string_lossy(), started.elapsed());

            emit_report(&report, &config, format, detailed, save.as_deref())
        }

        Commands::Match {
            resume,
            job,
            output,
            detailed,
            save,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            info!("Matching {} against {}", resume.display(), job.display());

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            let started = Instant::now();
            let matcher = JobMatcher::new(TextNormalizer::new(), &config.scoring);
            let result = matcher.calculate_match_score(&resume_text, &job_text);
            let suggestions = matcher.generate_improvement_suggestions(&result);
            let report = ScoringReport::from_match(
                result,
                suggestions,
                &resume.to_string_lossy(),
                &job.to_string_lossy(),
                started.elapsed(),
            );

            emit_report(&report, &config, format, detailed, save.as_deref())
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeScorerError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("{}", "Current Configuration".bold());
                    println!("# {}\n", path.display());
                    println!("{}", content);
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset to defaults at {}", path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
            Ok(())
        }
    }
}

fn resolve_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(ResumeScorerError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn emit_report(
    report: &ScoringReport,
    config: &Config,
    format: OutputFormat,
    detailed: bool,
    save: Option<&Path>,
) -> Result<()> {
    // files never get ANSI escapes
    let generator = ReportGenerator::with_options(
        config.output.color_output && save.is_none(),
        detailed || config.output.detailed,
        true,
        true,
    );
    let content = generator.generate_report(report, &format)?;

    match save {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(suggest_filename(&format, &report.metadata.resume_file, true))
            } else {
                path.to_path_buf()
            };
            save_report_to_file(&content, &path)?;
            info!("Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }

    if report.is_degraded() {
        warn!("Analysis fell back to default results");
    }

    Ok(())
}
