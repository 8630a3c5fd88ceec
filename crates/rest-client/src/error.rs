//! REST client error types.

use thiserror::Error;

/// Transport-level errors raised while issuing a request.
///
/// Status codes are not errors at this layer; they come back in
/// [`crate::RestResponse`] for the caller to classify.
#[derive(Debug, Error)]
pub enum RestError {
    /// Request timed out.
    #[error("Request timeout")]
    Timeout,

    /// Connection error (network issue).
    #[error("Connection error: {0}")]
    Connection(String),

    /// Failed to build the HTTP request.
    #[error("Request build error: {0}")]
    RequestBuild(String),
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RestError::Timeout
        } else if err.is_builder() || err.is_request() {
            RestError::RequestBuild(err.to_string())
        } else {
            RestError::Connection(err.to_string())
        }
    }
}
