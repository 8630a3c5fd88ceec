//! Signed request execution against the Tuya open API.

use crate::envelope::Envelope;
use crate::error::TuyaRestError;
use crate::params::{RequestParams, ValidRequest};
use auth::RequestSigner;
use rest_client::RestClient;
use serde_json::Value;
use std::time::Duration;

/// Header carrying the caller's access token; its value is folded into the
/// canonical string.
const ACCESS_TOKEN_HEADER: &str = "access_token";

/// Signature algorithm advertised in the `sign_method` header.
const SIGN_METHOD: &str = "HMAC-SHA256";

/// Signed request adapter for the Tuya open API.
///
/// Stateless aside from the underlying HTTP client; concurrent `execute`
/// calls are independent.
pub struct TuyaRestClient {
    rest: RestClient,
}

impl TuyaRestClient {
    /// Create a client with the default transport timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, TuyaRestError> {
        Ok(Self {
            rest: RestClient::with_default_timeout()?,
        })
    }

    /// Create a client with an explicit transport timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TuyaRestError> {
        Ok(Self {
            rest: RestClient::new(timeout)?,
        })
    }

    /// Validate, sign, send, and classify one request.
    ///
    /// `Ok` carries the forwarded payload: the envelope's `result` object,
    /// or the raw JSON verbatim when the body matches neither envelope
    /// shape. Every failure path maps to one [`TuyaRestError`].
    pub async fn execute(&self, params: RequestParams) -> Result<Value, TuyaRestError> {
        let request = params.validate()?;
        self.execute_valid(request, now_ms()).await
    }

    async fn execute_valid(
        &self,
        request: ValidRequest,
        timestamp_ms: i64,
    ) -> Result<Value, TuyaRestError> {
        let signer = RequestSigner::new(&request.credentials);

        let access_token = request
            .headers
            .get(ACCESS_TOKEN_HEADER)
            .map(String::as_str)
            .unwrap_or("");

        let sign = signer.sign_request(
            access_token,
            timestamp_ms,
            request.method.as_str(),
            &request.path,
            &request.body,
        );

        // Reserved signing headers always win over caller-supplied values.
        let mut headers = request.headers;
        headers.insert(
            "client_id".to_string(),
            request.credentials.client_id().to_string(),
        );
        headers.insert("t".to_string(), timestamp_ms.to_string());
        headers.insert("sign_method".to_string(), SIGN_METHOD.to_string());
        headers.insert("sign".to_string(), sign);

        let url = RestClient::build_url(&request.server, &request.path);

        tracing::debug!(
            method = %request.method,
            url = %url,
            client_id = %request.credentials.client_id(),
            "Issuing signed request"
        );

        let reply = self
            .rest
            .execute(request.method.as_str(), &url, &headers, &request.body)
            .await?;

        if reply.status != 200 {
            return Err(TuyaRestError::HttpStatus {
                code: reply.status,
                message: reply.status_message,
            });
        }

        let data: Value = match serde_json::from_str(&reply.body) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(error = %err, "Response body is not valid JSON");
                return Err(TuyaRestError::ResponseParse { body: reply.body });
            }
        };

        match Envelope::classify(data) {
            Envelope::Success { result } => Ok(result),
            Envelope::Failure { code, msg } => Err(TuyaRestError::Api { code, message: msg }),
            Envelope::Other(raw) => Ok(raw),
        }
    }
}

/// Current time in epoch milliseconds.
fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
