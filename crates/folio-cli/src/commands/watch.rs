//! Watch command implementation.
//!
//! Runs the refresh task and redraws the dashboard after every attempt until
//! Ctrl-C (or `--count` attempts).

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use tracing::info;

use folio_feed::{DashboardState, RefreshTask};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliError;
use crate::output::{holding_records, render_state, write_csv, LOADING_MESSAGE};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Arguments for the watch command.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Seconds between refreshes (defaults to the configured interval, 15)
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Exit after this many refresh attempts
    #[arg(short = 'n', long)]
    pub count: Option<u64>,
}

/// Execute the watch command.
pub async fn execute(args: WatchArgs, ctx: &Context) -> Result<()> {
    let interval = args.interval.unwrap_or(ctx.feed.refresh_interval_secs);
    if interval == 0 {
        return Err(CliError::InvalidInterval(interval).into());
    }

    let source = ctx.source()?;
    let handle = RefreshTask::start(source, Duration::from_secs(interval))?;
    let mut updates = handle.subscribe();

    if ctx.format == OutputFormat::Table && !ctx.quiet {
        println!("{LOADING_MESSAGE}");
    }

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                draw(&state, ctx)?;

                if args.count.is_some_and(|n| state.refresh_count >= n) {
                    break;
                }
            }
            _ = &mut ctrl_c => {
                info!("Interrupted, stopping refresh");
                break;
            }
        }
    }

    handle.stop().await?;
    Ok(())
}

fn draw(state: &DashboardState, ctx: &Context) -> Result<()> {
    match ctx.format {
        OutputFormat::Table => {
            if ctx.colorize {
                print!("{CLEAR_SCREEN}");
            }
            println!("{}", render_state(state, ctx.colorize));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(state)?);
        }
        OutputFormat::Csv => {
            // only fresh data; a failed attempt leaves nothing new to export
            if let (Some(snapshot), None) = (&state.snapshot, &state.last_error) {
                write_csv(&holding_records(snapshot), std::io::stdout())?;
            }
        }
    }
    Ok(())
}
