//! Folio CLI - live sector-grouped portfolio dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Show the dashboard once
//! folio show
//!
//! # Keep it on screen, refreshing every 15 seconds
//! folio watch
//!
//! # Read holdings from a file and export as CSV
//! folio --file holdings.json --format csv show
//!
//! # Report figures that do not add up
//! folio check --tolerance 0.5
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr
    let default_filter = if cli.quiet { "error" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let ctx = Context::from_cli(&cli)?;

    match cli.command {
        Commands::Show => commands::show::execute(&ctx).await?,
        Commands::Watch(args) => commands::watch::execute(args, &ctx).await?,
        Commands::Check(args) => commands::check::execute(args, &ctx).await?,
    }

    Ok(())
}
