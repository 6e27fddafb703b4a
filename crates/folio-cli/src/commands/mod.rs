//! CLI command implementations.

pub mod check;
pub mod show;
pub mod watch;

pub use check::CheckArgs;
pub use watch::WatchArgs;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use folio_feed::{FeedConfig, FileHoldingsSource, HoldingsSource, HttpHoldingsSource};

use crate::cli::{Cli, OutputFormat};
use crate::error::CliResult;

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub format: OutputFormat,
    pub colorize: bool,
    pub quiet: bool,
    pub feed: FeedConfig,
    pub file: Option<PathBuf>,
}

impl Context {
    /// Resolve the feed configuration: file first, then command-line overrides.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let mut feed = match &cli.config {
            Some(path) => {
                debug!("Loading feed configuration from {}", path.display());
                FeedConfig::from_file(path)?
            }
            None => FeedConfig::default(),
        };
        if let Some(endpoint) = &cli.endpoint {
            feed = feed.with_endpoint(endpoint.clone());
        }

        Ok(Self {
            format: cli.format,
            colorize: !cli.no_color && std::io::stdout().is_terminal(),
            quiet: cli.quiet,
            feed,
            file: cli.file.clone(),
        })
    }

    /// The holdings source selected by `--file` or the configured endpoint.
    pub fn source(&self) -> CliResult<Arc<dyn HoldingsSource>> {
        match &self.file {
            Some(path) => Ok(Arc::new(FileHoldingsSource::new(path.clone()))),
            None => Ok(Arc::new(HttpHoldingsSource::from_config(&self.feed)?)),
        }
    }
}
