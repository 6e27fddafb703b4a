//! # Folio Feed
//!
//! Holdings sources and the periodic refresh task behind the dashboard.
//!
//! - [`source`]: where holdings come from (portfolio service, file, memory)
//! - [`refresh`]: one-shot and periodic refresh into a [`DashboardState`]
//! - [`config`]: endpoint and interval settings, loadable from TOML
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use folio_feed::{FeedConfig, HttpHoldingsSource, RefreshTask};
//!
//! # async fn run() -> folio_feed::FeedResult<()> {
//! let config = FeedConfig::default();
//! let source = Arc::new(HttpHoldingsSource::from_config(&config)?);
//! let handle = RefreshTask::start(source, config.refresh_interval())?;
//!
//! let mut updates = handle.subscribe();
//! updates.changed().await.ok();
//! println!("loading: {}", updates.borrow().is_loading());
//!
//! handle.stop().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod refresh;
pub mod snapshot;
pub mod source;

pub use config::FeedConfig;
pub use error::{FeedError, FeedResult};
pub use refresh::{refresh_once, RefreshHandle, RefreshTask};
pub use snapshot::{DashboardState, PortfolioSnapshot};
pub use source::{
    parse_holdings, FileHoldingsSource, HoldingsSource, HttpHoldingsSource, SourceType,
    StaticHoldingsSource,
};
