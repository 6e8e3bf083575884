//! Error types for the IndexNow client
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for IndexNow operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the IndexNow client
///
/// Transport failures and submission (HTTP status) failures are distinct
/// variants: a `Transport` error means the request never produced a
/// response, while a `Submission` error carries the response it got.
#[derive(Error, Debug)]
pub enum Error {
    /// The network call itself failed (DNS, connection, timeout)
    ///
    /// Produced by `HttpTransport` implementations and propagated unchanged.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request was sent and a response received, but the status code
    /// was not 200/202
    ///
    /// `message` is the explanation resolved from the configured
    /// [`StatusMessageTable`](crate::StatusMessageTable); known codes
    /// (400/403/422/429) and unexpected ones share this shape and differ
    /// only in message text, so callers needing programmatic branching
    /// should match on `status`.
    #[error("{message} (HTTP {status})")]
    Submission {
        /// Human-readable explanation for the status code
        message: String,
        /// The HTTP status code of the response
        status: u16,
        /// The full response, for header/body inspection
        response: http::Response<Vec<u8>>,
    },

    /// An argument violated a non-empty precondition
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Request assembly failed
    #[error("Request error: {0}")]
    Request(#[from] http::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a submission error from a non-success response
    pub fn submission(message: impl Into<String>, response: http::Response<Vec<u8>>) -> Self {
        Self::Submission {
            message: message.into(),
            status: response.status().as_u16(),
            response,
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// The HTTP status code carried by a `Submission` error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Submission { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The full response carried by a `Submission` error, if any
    pub fn response(&self) -> Option<&http::Response<Vec<u8>>> {
        match self {
            Self::Submission { response, .. } => Some(response),
            _ => None,
        }
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
