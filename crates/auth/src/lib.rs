//! Authentication and request signing for the Tuya open API.
//!
//! This crate provides secure credential management and the HMAC-SHA256
//! request signature the platform verifies on every call.
//!
//! # Features
//!
//! - **Secure Credentials**: the API secret is wrapped in `SecretString` to
//!   prevent accidental logging and ensure memory is zeroed on drop.
//! - **Canonical-string signing**: builds the exact byte sequence the
//!   platform signs (client id, access token, timestamp, method, body hash,
//!   path) and computes the uppercase hex HMAC-SHA256 over it.
//! - **Environment Loading**: credentials can be loaded from environment
//!   variables or a `.env` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, RequestSigner};
//!
//! let credentials = ApiCredentials::from_env()?;
//! let signer = RequestSigner::new(&credentials);
//!
//! let sign = signer.sign_request("", timestamp_ms, "GET", "/v1.0/token?grant_type=1", "");
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::ApiCredentials;
pub use error::AuthError;
pub use signer::{content_hash, RequestSigner, EMPTY_BODY_SHA256};
