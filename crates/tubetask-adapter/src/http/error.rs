/*
[INPUT]:  Error sources (input validation, HTTP transport, upstream API)
[OUTPUT]: Structured error types for the search gateway
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the video search adapter
#[derive(Error, Debug)]
pub enum SearchError {
    /// A required input was empty; no request was issued
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    /// Upstream API answered with a non-success status
    #[error("Search API error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    /// HTTP request failed in transit, or a success body could not be decoded
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl SearchError {
    /// Create an upstream error from status code and message
    pub fn upstream(status: StatusCode, message: impl Into<String>) -> Self {
        SearchError::Upstream {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// Upstream status code, if this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the error was raised before any request left the process
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SearchError::InvalidInput(_))
    }
}

/// Result type alias for search gateway operations
pub type Result<T> = std::result::Result<T, SearchError>;
