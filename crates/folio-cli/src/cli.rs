//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CheckArgs, WatchArgs};

/// Folio - Live sector-grouped portfolio dashboard
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Feed configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Portfolio service endpoint (overrides the configuration file)
    #[arg(short, long, env = "FOLIO_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Read holdings from a JSON file instead of the portfolio service
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch holdings once and show the sector-grouped dashboard
    Show,

    /// Keep the dashboard on screen, refreshing on an interval
    Watch(WatchArgs),

    /// Report inconsistent figures in the holdings data
    Check(CheckArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
