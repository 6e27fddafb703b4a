//! Feed error types.

use thiserror::Error;

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Feed error type.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The request never produced a response (connect, timeout, body read)
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The payload is not an array of well-formed holdings
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// Local file error
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// The refresh task ended abnormally
    #[error("refresh task failed: {0}")]
    Task(String),
}

impl FeedError {
    /// Returns true for failures of the remote service or the network.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, FeedError::Transport(_) | FeedError::Status { .. })
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        FeedError::Transport(e.to_string())
    }
}

impl From<std::io::Error> for FeedError {
    fn from(e: std::io::Error) -> Self {
        FeedError::Io(e.to_string())
    }
}
