//! TeamSkin - terminal visual editor for a team's mobile app theme
//!
//! Opens a live preview of the simulated app; in inspector mode, clicking
//! an element opens its properties for editing.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use teamskin::cli::Commands;
use teamskin::config::Config;
use teamskin::constants::{APP_BINARY_NAME, DEFAULT_LOG_FILTER};
use teamskin::tui;

/// TeamSkin - click-to-edit theming for a team's mobile app
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
struct Cli {
    /// Project file to open (created on first save when missing)
    #[arg(value_name = "PROJECT")]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(command) => {
            init_stderr_logging();
            command.execute()
        }
        None => run_editor(cli.project),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// CLI subcommands log to stderr so stdout stays machine-readable.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// The editor owns the terminal, so its log goes to a file.
fn init_file_logging() -> Result<()> {
    let path = Config::log_file_path()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_editor(project: Option<PathBuf>) -> Result<()> {
    if let Some(path) = &project {
        if path.is_dir() {
            anyhow::bail!(
                "{} is a directory; pass a project file, e.g. `{APP_BINARY_NAME} my_team.json`",
                path.display()
            );
        }
    }

    init_file_logging()?;
    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not load configuration, using defaults");
        Config::default()
    });
    tracing::info!(project = ?project, "starting editor");
    tui::run_editor(project, config)
}
