//! Generic REST client wrapper around reqwest.

use crate::error::RestError;
use reqwest::{Client, Method};
use std::collections::HashMap;
use std::time::Duration;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A completed HTTP exchange: status plus the full body text.
///
/// The client never interprets the status or the body; callers classify
/// both according to their protocol.
#[derive(Debug, Clone)]
pub struct RestResponse {
    /// HTTP status code.
    pub status: u16,
    /// Canonical reason phrase for the status code.
    pub status_message: String,
    /// Full response body as text.
    pub body: String,
}

/// Generic REST client for making HTTP requests.
pub struct RestClient {
    client: Client,
}

impl RestClient {
    /// Create a new REST client.
    ///
    /// # Arguments
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RestError::RequestBuild(e.to_string()))?;

        Ok(Self { client })
    }

    /// Create a new REST client with default timeout.
    pub fn with_default_timeout() -> Result<Self, RestError> {
        Self::new(DEFAULT_TIMEOUT)
    }

    /// Build a full URL from a server host and path.
    ///
    /// A bare host gets the `https://` scheme (the open API is HTTPS only);
    /// a server value that already carries a scheme is used as-is, which
    /// lets tests target a local mock server.
    pub fn build_url(server: &str, path: &str) -> String {
        let server = server.trim_end_matches('/');

        if server.starts_with("http://") || server.starts_with("https://") {
            format!("{}{}", server, path)
        } else {
            format!("https://{}{}", server, path)
        }
    }

    /// Issue a request and await the full response.
    ///
    /// # Arguments
    /// * `method` - HTTP verb, e.g. "GET"
    /// * `url` - Full URL including scheme
    /// * `headers` - Headers to set on the request
    /// * `body` - Raw body text; the empty string still sets an empty body
    pub async fn execute(
        &self,
        method: &str,
        url: &str,
        headers: &HashMap<String, String>,
        body: &str,
    ) -> Result<RestResponse, RestError> {
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| RestError::RequestBuild(format!("invalid HTTP method: {}", method)))?;

        tracing::debug!(method = %method, url = %url, "Issuing request");

        let mut request = self.client.request(method, url);

        for (key, value) in headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request.body(body.to_string()).send().await?;

        let status = response.status();
        let status_message = status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_string();
        let body = response.text().await?;

        Ok(RestResponse {
            status: status.as_u16(),
            status_message,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_bare_host() {
        assert_eq!(
            RestClient::build_url("openapi.tuyacn.com", "/v1.0/token?grant_type=1"),
            "https://openapi.tuyacn.com/v1.0/token?grant_type=1"
        );
    }

    #[test]
    fn test_build_url_keeps_existing_scheme() {
        assert_eq!(
            RestClient::build_url("http://127.0.0.1:8080", "/v1.0/token"),
            "http://127.0.0.1:8080/v1.0/token"
        );
        assert_eq!(
            RestClient::build_url("https://openapi.tuyaeu.com", "/v1.0/token"),
            "https://openapi.tuyaeu.com/v1.0/token"
        );
    }

    #[test]
    fn test_build_url_strips_trailing_slash() {
        assert_eq!(
            RestClient::build_url("openapi.tuyacn.com/", "/v1.0/token"),
            "https://openapi.tuyacn.com/v1.0/token"
        );
    }
}
