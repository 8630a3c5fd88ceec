//! Tuya open API request adapter.
//!
//! This crate is the core of the connector: it validates loosely-typed
//! request parameters, signs the call with HMAC-SHA256, sends it, and
//! classifies the platform's response envelope.
//!
//! - **Validation**: every input field passes an explicit predicate before
//!   anything is sent; the first invalid field aborts with no side effects.
//! - **Signing**: canonical string + uppercase hex HMAC via the `auth` crate,
//!   with the reserved `client_id`/`t`/`sign_method`/`sign` headers merged
//!   over caller-supplied headers.
//! - **Classification**: `{success:true, result}` forwards the result,
//!   `{success:false, code, msg}` becomes a typed API error, anything else
//!   that is valid JSON passes through verbatim.
//!
//! # Example
//!
//! ```rust,ignore
//! use tuya_rest::{RequestParams, TuyaRestClient};
//!
//! let client = TuyaRestClient::new()?;
//! let params = RequestParams::new(
//!     "my_client_id",
//!     "my_secret",
//!     "openapi.tuyacn.com",
//!     "/v1.0/token?grant_type=1",
//!     "GET",
//! );
//!
//! let payload = client.execute(params).await?;
//! ```

mod client;
mod envelope;
mod error;
mod params;

pub use client::TuyaRestClient;
pub use envelope::Envelope;
pub use error::{ParamError, TuyaRestError};
pub use params::{Method, RequestParams, ValidRequest, METHODS};
