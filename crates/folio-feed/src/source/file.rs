//! Local holdings sources.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_core::Holding;

use super::{parse_holdings, HoldingsSource, SourceType};
use crate::error::{FeedError, FeedResult};

/// Reads the service payload from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct FileHoldingsSource {
    path: PathBuf,
}

impl FileHoldingsSource {
    /// Create a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HoldingsSource for FileHoldingsSource {
    fn source_type(&self) -> SourceType {
        SourceType::File
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_holdings(&self) -> FeedResult<Vec<Holding>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| FeedError::Io(format!("{}: {e}", self.path.display())))?;
        parse_holdings(&bytes)
    }
}

/// Serves a fixed holdings list.
#[derive(Debug, Clone, Default)]
pub struct StaticHoldingsSource {
    holdings: Vec<Holding>,
}

impl StaticHoldingsSource {
    /// Create a source that always returns `holdings`.
    pub fn new(holdings: Vec<Holding>) -> Self {
        Self { holdings }
    }
}

#[async_trait]
impl HoldingsSource for StaticHoldingsSource {
    fn source_type(&self) -> SourceType {
        SourceType::Static
    }

    fn describe(&self) -> String {
        format!("{} static holdings", self.holdings.len())
    }

    async fn fetch_holdings(&self) -> FeedResult<Vec<Holding>> {
        Ok(self.holdings.clone())
    }
}
