//! CLI error types.

use rust_decimal::Decimal;
use thiserror::Error;

use folio_feed::FeedError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid refresh interval.
    #[error("Invalid refresh interval: {0}. Must be at least 1 second.")]
    InvalidInterval(u64),

    /// Invalid consistency tolerance.
    #[error("Invalid tolerance: {0}. Must not be negative.")]
    InvalidTolerance(Decimal),

    /// Feed error.
    #[error(transparent)]
    Feed(#[from] FeedError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
