//! Surveyscope CLI — terminal analytics client for the campus survey
//! platform.
//!
//! Lists surveys, dumps paginated raw responses, downloads spreadsheet
//! exports, and renders per-question analytics either as plain text or
//! in an interactive TUI.

mod commands;
mod text;
mod tui;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Surveyscope: survey analytics in your terminal
#[derive(Parser, Debug)]
#[command(name = "surveyscope", version, about, long_about = None)]
struct Cli {
    /// Platform base URL (overrides configuration)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Configuration file directory (defaults to the current directory)
    #[arg(short, long, default_value = ".")]
    workdir: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List surveys
    Surveys {
        /// Only surveys created by the session user
        #[arg(long)]
        mine: bool,
        /// Filter by status (DRAFT, PUBLISHED, PAUSED, ENDED)
        #[arg(short, long)]
        status: Option<String>,
        /// Title keyword filter
        #[arg(short, long)]
        keyword: Option<String>,
        /// Page number (1-based)
        #[arg(long, default_value = "1")]
        page: u32,
        /// Page size
        #[arg(long, default_value = "20")]
        page_size: u32,
    },
    /// Per-question analytics for a survey (interactive by default)
    Analytics {
        /// Survey id
        survey_id: String,
        /// Print every question's table instead of opening the TUI
        #[arg(long)]
        no_tui: bool,
    },
    /// List raw responses for a survey
    Responses {
        /// Survey id
        survey_id: String,
        /// Page number (1-based)
        #[arg(long, default_value = "1")]
        page: u32,
        /// Page size
        #[arg(long, default_value = "20")]
        page_size: u32,
    },
    /// Download the response spreadsheet for a survey
    Export {
        /// Survey id
        survey_id: String,
        /// Output directory (defaults to configuration, then cwd)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Probe the platform's health endpoint
    Health,
}

#[derive(clap::Subcommand, Debug)]
enum ConfigAction {
    /// Create a default configuration file
    Init,
    /// Show current configuration
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Set up tracing: human-readable stderr + JSON file logging
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // Human-readable layer for stderr (always active)
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(EnvFilter::new(filter));

    // JSON file layer for structured logging
    let log_dir = directories::ProjectDirs::from("io", "surveyscope", "surveyscope")
        .map(|d| d.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("."));
    let _ = std::fs::create_dir_all(&log_dir);
    let file_appender = tracing_appender::rolling::daily(&log_dir, "surveyscope.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(non_blocking)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    // Resolve working directory
    let workdir = cli
        .workdir
        .canonicalize()
        .unwrap_or_else(|_| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    // Load configuration and apply CLI overrides
    let mut config = surveyscope_core::load_config(Some(&workdir), None)
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }

    commands::handle_command(cli.command, config, &workdir).await
}
