//! avcombine - Main entry point
//!
//! Handles:
//! - Command-line parsing
//! - Configuration loading
//! - Logging initialization
//! - Running the combine flow on stdin/stdout and mapping its exit code

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use avcombine_core::config::{ConfigManager, Settings};
use avcombine_core::logging::{init_tracing, LogConfig, LogLevel, RunLoggerBuilder};
use avcombine_core::models::PresetAnswers;
use avcombine_core::prompt::{unbuffered_stdin, Prompter};
use avcombine_core::runner::SystemRunner;
use avcombine_core::Combiner;

/// Combine a video-only file and an audio file into one MP4 using ffmpeg.
///
/// Any file name not given on the command line is asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "avcombine", version)]
struct Cli {
    /// Video-only input file
    video: Option<String>,

    /// Audio input file
    audio: Option<String>,

    /// Output file (overwritten if it exists)
    output: Option<String>,

    /// Config file (default: .config/avcombine.toml, optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// ffmpeg program name or path (overrides the config file)
    #[arg(long)]
    ffmpeg: Option<String>,

    /// Print the ffmpeg command without running it
    #[arg(long)]
    dry_run: bool,

    /// Debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Default config path: .config/avcombine.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("avcombine.toml")
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Load settings, honoring an explicit `--config` strictly.
fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut manager = match &cli.config {
        Some(path) => {
            let mut manager = ConfigManager::new(path);
            manager
                .load()
                .with_context(|| format!("loading config {}", path.display()))?;
            manager
        }
        None => {
            let mut manager = ConfigManager::new(default_config_path());
            manager
                .load_or_default()
                .with_context(|| format!("loading config {}", manager.path().display()))?;
            manager
        }
    };

    if let Some(ffmpeg) = &cli.ffmpeg {
        manager.settings_mut().tools.ffmpeg = ffmpeg.clone();
    }
    if cli.verbose {
        manager.settings_mut().logging.level = LogLevel::Debug;
    }

    Ok(manager.settings().clone())
}

fn run(cli: Cli) -> Result<i32> {
    let settings = load_settings(&cli)?;

    init_tracing(settings.logging.level);
    tracing::debug!("avcombine core {}", avcombine_core::version());

    let logger = RunLoggerBuilder::new()
        .config(LogConfig::from(&settings.logging))
        .log_file(&settings.logging.log_file)
        .build()
        .with_context(|| format!("opening log file {}", settings.logging.log_file))?;
    if let Some(path) = logger.log_path() {
        tracing::debug!("Logging to {}", path.display());
    }

    let runner = SystemRunner::new();
    let combiner = Combiner::new(&runner, &logger)
        .with_program(settings.tools.ffmpeg.clone())
        .with_dry_run(cli.dry_run);

    let preset = PresetAnswers {
        video: cli.video,
        audio: cli.audio,
        output: cli.output,
    };

    let stdin = unbuffered_stdin().context("opening stdin")?;
    let mut prompter = Prompter::new(stdin, io::stdout());

    // Errors are already reported by the combiner
    let code = match combiner.run(&mut prompter, &preset) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => e.exit_code(),
    };

    logger.close();
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_fully_interactive() {
        let cli = Cli::try_parse_from(["avcombine"]).unwrap();
        assert!(cli.video.is_none());
        assert!(cli.audio.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.dry_run);
    }

    #[test]
    fn positional_paths_and_flags() {
        let cli = Cli::try_parse_from([
            "avcombine",
            "clip.mp4",
            "track.wav",
            "final.mp4",
            "--ffmpeg",
            "/opt/ffmpeg",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.video.as_deref(), Some("clip.mp4"));
        assert_eq!(cli.audio.as_deref(), Some("track.wav"));
        assert_eq!(cli.output.as_deref(), Some("final.mp4"));
        assert_eq!(cli.ffmpeg.as_deref(), Some("/opt/ffmpeg"));
        assert!(cli.dry_run);
    }

    #[test]
    fn explicit_missing_config_is_error() {
        let cli = Cli::try_parse_from([
            "avcombine",
            "--config",
            "/nonexistent/avcombine.toml",
        ])
        .unwrap();
        assert!(load_settings(&cli).is_err());
    }

    #[test]
    fn overrides_apply_to_settings() {
        let cli = Cli::try_parse_from(["avcombine", "--ffmpeg", "ffmpeg7", "-v"]).unwrap();
        // Default config path is relative; absent in the test working directory
        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.tools.ffmpeg, "ffmpeg7");
        assert_eq!(settings.logging.level, LogLevel::Debug);
    }
}
