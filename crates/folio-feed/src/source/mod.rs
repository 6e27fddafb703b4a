//! Holdings data sources.
//!
//! - [`HoldingsSource`]: the seam every source implements
//! - [`HttpHoldingsSource`]: the portfolio service (`GET` a JSON array)
//! - [`FileHoldingsSource`]: the same payload read from disk
//! - [`StaticHoldingsSource`]: fixed in-memory holdings
//!
//! All payloads go through [`parse_holdings`], so a malformed response is
//! rejected here and never reaches the aggregation engine.

mod file;
mod http;

use std::fmt;

use async_trait::async_trait;
use folio_core::Holding;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FeedError, FeedResult};

pub use file::{FileHoldingsSource, StaticHoldingsSource};
pub use http::HttpHoldingsSource;

/// Kind of holdings source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    /// Remote portfolio service
    Http,
    /// Local JSON file
    File,
    /// In-memory holdings
    Static,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceType::Http => "http",
            SourceType::File => "file",
            SourceType::Static => "static",
        };
        f.write_str(name)
    }
}

/// Trait for holdings providers.
#[async_trait]
pub trait HoldingsSource: Send + Sync {
    /// Source type.
    fn source_type(&self) -> SourceType;

    /// Human-readable location (URL, path), for logs.
    fn describe(&self) -> String;

    /// Fetch the full holdings list, in source order.
    async fn fetch_holdings(&self) -> FeedResult<Vec<Holding>>;
}

/// Parses a portfolio payload.
///
/// The payload must be a JSON array; each element must be a holding with a
/// non-blank `id`. Array order is preserved. Errors name the offending
/// element by index.
pub fn parse_holdings(payload: &[u8]) -> FeedResult<Vec<Holding>> {
    let value: Value = serde_json::from_slice(payload)
        .map_err(|e| FeedError::MalformedPayload(format!("invalid JSON: {e}")))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(FeedError::MalformedPayload(format!(
                "expected an array of holdings, got {}",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let holding: Holding = serde_json::from_value(item)
                .map_err(|e| FeedError::MalformedPayload(format!("holding #{i}: {e}")))?;
            holding
                .validate()
                .map_err(|e| FeedError::MalformedPayload(format!("holding #{i}: {e}")))?;
            Ok(holding)
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
