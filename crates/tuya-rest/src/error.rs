//! Adapter error types.

use rest_client::RestError;
use serde_json::{json, Value};
use thiserror::Error;

/// A request parameter failed its validation predicate.
///
/// One variant per field, raised fail-fast in field order; no request is
/// sent once any of these fires.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("\"clientId\" must be a non-empty string")]
    ClientId,

    #[error("\"secret\" must be a non-empty string")]
    Secret,

    #[error("\"server\" must be a valid domain name")]
    Server,

    #[error("\"path\" must be a non-empty string")]
    Path,

    #[error("\"method\" must be one of \"GET, POST, PUT, PATCH, DELETE\"")]
    Method,

    #[error("failed to JSON parse \"headers\" definition")]
    HeadersParse,

    #[error("\"headers\" must be a string record")]
    HeadersShape,

    #[error("\"body\" must be a non-nullable serializable object")]
    Body,
}

/// Errors surfaced by [`crate::TuyaRestClient::execute`].
///
/// Every failure path terminates in exactly one of these; there is no
/// retry and nothing is dropped silently.
#[derive(Debug, Error)]
pub enum TuyaRestError {
    /// A parameter failed validation; nothing was sent.
    #[error(transparent)]
    Params(#[from] ParamError),

    /// Transport-level failure (connection, timeout, request build).
    #[error(transparent)]
    Rest(#[from] RestError),

    /// The server answered with a non-200 status.
    #[error("{message}")]
    HttpStatus {
        /// HTTP status code.
        code: u16,
        /// Canonical reason phrase.
        message: String,
    },

    /// The platform returned a failure envelope (`success:false`).
    #[error("{message}")]
    Api {
        /// Platform error code.
        code: i64,
        /// Platform error message.
        message: String,
    },

    /// The response body was not valid JSON.
    #[error("Failed to parse chunks as JSON")]
    ResponseParse {
        /// Raw response body.
        body: String,
    },
}

impl TuyaRestError {
    /// Structured details for the host's error report.
    ///
    /// The host forwards this object alongside the human-readable message.
    pub fn details(&self) -> Value {
        match self {
            Self::Params(err) => json!({ "message": err.to_string() }),
            Self::Rest(err) => json!({ "message": err.to_string() }),
            Self::HttpStatus { code, message } => json!({
                "code": code,
                "message": message,
            }),
            Self::Api { code, message } => json!({
                "code": code,
                "message": message,
            }),
            Self::ResponseParse { body } => json!({
                "message": self.to_string(),
                "chunks": body,
            }),
        }
    }
}
