//! Generic REST client infrastructure.
//!
//! This crate provides a thin wrapper around `reqwest` with:
//!
//! - Consistent transport error handling via `RestError`
//! - Arbitrary HTTP methods with raw headers and a raw string body
//! - Status code and body text returned untouched, so callers own the
//!   interpretation of the response
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::RestClient;
//! use std::collections::HashMap;
//!
//! let client = RestClient::with_default_timeout()?;
//! let url = RestClient::build_url("openapi.tuyacn.com", "/v1.0/token?grant_type=1");
//! let reply = client.execute("GET", &url, &HashMap::new(), "").await?;
//! println!("{} {}", reply.status, reply.body);
//! ```

mod client;
mod error;

pub use client::{RestClient, RestResponse};
pub use error::RestError;
