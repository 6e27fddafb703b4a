//! Portfolio service client.

use std::time::Duration;

use async_trait::async_trait;
use folio_core::Holding;
use reqwest::Client;
use tracing::debug;

use super::{parse_holdings, HoldingsSource, SourceType};
use crate::config::FeedConfig;
use crate::error::{FeedError, FeedResult};

/// Fetches holdings with `GET <endpoint>`.
#[derive(Debug, Clone)]
pub struct HttpHoldingsSource {
    client: Client,
    endpoint: String,
}

impl HttpHoldingsSource {
    /// Create a client for `endpoint` with a per-request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> FeedResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Create a client from feed configuration.
    pub fn from_config(config: &FeedConfig) -> FeedResult<Self> {
        config.validate()?;
        Self::new(config.endpoint.clone(), config.request_timeout())
    }

    /// The endpoint this client polls.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl HoldingsSource for HttpHoldingsSource {
    fn source_type(&self) -> SourceType {
        SourceType::Http
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }

    async fn fetch_holdings(&self) -> FeedResult<Vec<Holding>> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.bytes().await?;
        debug!("Fetched {} bytes from {}", body.len(), self.endpoint);

        parse_holdings(&body)
    }
}
