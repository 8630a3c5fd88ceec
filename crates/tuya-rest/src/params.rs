//! Request parameter validation.
//!
//! Inputs arrive loosely typed (per-call overrides come from an untyped
//! flow message), so every field passes an explicit predicate that either
//! yields its typed form or the first [`ParamError`], in field order, with
//! no side effects.

use crate::error::ParamError;
use auth::ApiCredentials;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The HTTP verbs the adapter accepts.
pub const METHODS: [&str; 5] = ["GET", "POST", "PUT", "PATCH", "DELETE"];

/// Validated HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Uppercase verb as sent on the wire and in the canonical string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl FromStr for Method {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            _ => Err(ParamError::Method),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw inputs for one request, prior to validation.
///
/// Fields are `serde_json::Value` on purpose: overrides from a flow message
/// may carry any shape, and the validation predicates own the type checks.
/// An empty-string `body` means a body-less request.
#[derive(Debug, Clone)]
pub struct RequestParams {
    pub client_id: Value,
    pub secret: Value,
    pub server: Value,
    pub path: Value,
    pub method: Value,
    /// Caller headers: a string→string map, or a raw JSON string to parse.
    pub headers: Option<Value>,
    pub body: Value,
}

impl Default for RequestParams {
    fn default() -> Self {
        Self {
            client_id: Value::String(String::new()),
            secret: Value::String(String::new()),
            server: Value::String(String::new()),
            path: Value::String(String::new()),
            method: Value::String(String::new()),
            headers: None,
            body: Value::String(String::new()),
        }
    }
}

impl RequestParams {
    /// Convenience constructor for the five required fields.
    pub fn new(client_id: &str, secret: &str, server: &str, path: &str, method: &str) -> Self {
        Self {
            client_id: Value::String(client_id.to_string()),
            secret: Value::String(secret.to_string()),
            server: Value::String(server.to_string()),
            path: Value::String(path.to_string()),
            method: Value::String(method.to_string()),
            headers: None,
            body: Value::String(String::new()),
        }
    }

    /// Run every predicate in field order and produce the typed request.
    ///
    /// Fail fast: the first invalid field wins and nothing is sent.
    pub fn validate(self) -> Result<ValidRequest, ParamError> {
        let client_id = non_empty_string(&self.client_id).ok_or(ParamError::ClientId)?;
        let secret = non_empty_string(&self.secret).ok_or(ParamError::Secret)?;
        let server = non_empty_string(&self.server).ok_or(ParamError::Server)?;
        let path = non_empty_string(&self.path).ok_or(ParamError::Path)?;

        let method = self
            .method
            .as_str()
            .ok_or(ParamError::Method)?
            .parse::<Method>()?;

        let headers = resolve_headers(self.headers)?;
        let body = serialize_body(&self.body)?;

        Ok(ValidRequest {
            credentials: ApiCredentials::new(client_id, secret),
            server,
            path,
            method,
            headers,
            body,
        })
    }
}

/// A request whose every field passed validation.
#[derive(Debug, Clone)]
pub struct ValidRequest {
    pub credentials: ApiCredentials,
    pub server: String,
    pub path: String,
    pub method: Method,
    pub headers: HashMap<String, String>,
    /// Serialized JSON body, or the empty string for body-less requests.
    pub body: String,
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Resolve caller headers into a flat string→string map.
///
/// A raw string value (an editor-configured default is stored as free text)
/// is JSON-parsed first; the resolved value must then be a flat object with
/// string values, or absent.
fn resolve_headers(headers: Option<Value>) -> Result<HashMap<String, String>, ParamError> {
    let Some(value) = headers else {
        return Ok(HashMap::new());
    };

    let resolved = match value {
        Value::String(raw) => serde_json::from_str(&raw).map_err(|_| ParamError::HeadersParse)?,
        other => other,
    };

    if resolved.is_null() {
        return Ok(HashMap::new());
    }

    let map = resolved.as_object().ok_or(ParamError::HeadersShape)?;

    map.iter()
        .map(|(key, value)| {
            value
                .as_str()
                .map(|v| (key.clone(), v.to_string()))
                .ok_or(ParamError::HeadersShape)
        })
        .collect()
}

/// Body grammar: primitives, arrays of primitives, or nested objects of the
/// same, recursively. `null` is invalid anywhere.
fn is_serializable(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(_) | Value::Number(_) | Value::String(_) => true,
        Value::Array(items) => items.iter().all(is_serializable),
        Value::Object(map) => map.values().all(is_serializable),
    }
}

/// Serialize the payload into the request body.
///
/// The empty-string payload means no body. Anything else must be an object
/// satisfying the body grammar.
fn serialize_body(body: &Value) -> Result<String, ParamError> {
    if matches!(body, Value::String(s) if s.is_empty()) {
        return Ok(String::new());
    }

    if !body.is_object() || !is_serializable(body) {
        return Err(ParamError::Body);
    }

    serde_json::to_string(body).map_err(|_| ParamError::Body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_params() -> RequestParams {
        RequestParams::new(
            "client123",
            "secret456",
            "openapi.tuyacn.com",
            "/v1.0/token?grant_type=1",
            "GET",
        )
    }

    #[test]
    fn test_valid_params_pass() {
        let request = valid_params().validate().unwrap();
        assert_eq!(request.credentials.client_id(), "client123");
        assert_eq!(request.server, "openapi.tuyacn.com");
        assert_eq!(request.method, Method::Get);
        assert!(request.headers.is_empty());
        assert_eq!(request.body, "");
    }

    #[test]
    fn test_empty_client_id_rejected() {
        let mut params = valid_params();
        params.client_id = Value::String(String::new());
        assert_eq!(params.validate().unwrap_err(), ParamError::ClientId);
    }

    #[test]
    fn test_non_string_client_id_rejected() {
        let mut params = valid_params();
        params.client_id = json!(42);
        assert_eq!(params.validate().unwrap_err(), ParamError::ClientId);
    }

    #[test]
    fn test_empty_secret_rejected() {
        let mut params = valid_params();
        params.secret = Value::Null;
        assert_eq!(params.validate().unwrap_err(), ParamError::Secret);
    }

    #[test]
    fn test_empty_server_rejected() {
        let mut params = valid_params();
        params.server = Value::String(String::new());
        assert_eq!(params.validate().unwrap_err(), ParamError::Server);
    }

    #[test]
    fn test_empty_path_rejected() {
        let mut params = valid_params();
        params.path = Value::String(String::new());
        assert_eq!(params.validate().unwrap_err(), ParamError::Path);
    }

    #[test]
    fn test_unknown_method_rejected() {
        let mut params = valid_params();
        params.method = Value::String("FETCH".into());
        assert_eq!(params.validate().unwrap_err(), ParamError::Method);
    }

    #[test]
    fn test_lowercase_method_rejected() {
        let mut params = valid_params();
        params.method = Value::String("get".into());
        assert_eq!(params.validate().unwrap_err(), ParamError::Method);
    }

    #[test]
    fn test_first_failure_wins() {
        // Both clientId and method are invalid; clientId is reported.
        let mut params = valid_params();
        params.client_id = Value::Null;
        params.method = Value::String("FETCH".into());
        assert_eq!(params.validate().unwrap_err(), ParamError::ClientId);
    }

    #[test]
    fn test_headers_raw_string_is_parsed() {
        let mut params = valid_params();
        params.headers = Some(Value::String(r#"{"access_token":"abc"}"#.into()));

        let request = params.validate().unwrap();
        assert_eq!(request.headers.get("access_token"), Some(&"abc".to_string()));
    }

    #[test]
    fn test_headers_map_is_accepted() {
        let mut params = valid_params();
        params.headers = Some(json!({"access_token": "abc", "Accept": "application/json"}));

        let request = params.validate().unwrap();
        assert_eq!(request.headers.len(), 2);
    }

    #[test]
    fn test_headers_bad_json_rejected() {
        let mut params = valid_params();
        params.headers = Some(Value::String("{not json".into()));
        assert_eq!(params.validate().unwrap_err(), ParamError::HeadersParse);
    }

    #[test]
    fn test_headers_non_string_values_rejected() {
        let mut params = valid_params();
        params.headers = Some(json!({"access_token": 42}));
        assert_eq!(params.validate().unwrap_err(), ParamError::HeadersShape);
    }

    #[test]
    fn test_headers_array_rejected() {
        let mut params = valid_params();
        params.headers = Some(json!(["access_token"]));
        assert_eq!(params.validate().unwrap_err(), ParamError::HeadersShape);
    }

    #[test]
    fn test_null_headers_treated_as_absent() {
        let mut params = valid_params();
        params.headers = Some(Value::Null);
        assert!(params.validate().unwrap().headers.is_empty());
    }

    #[test]
    fn test_empty_payload_means_empty_body() {
        let request = valid_params().validate().unwrap();
        assert_eq!(request.body, "");
    }

    #[test]
    fn test_object_body_serialized() {
        let mut params = valid_params();
        params.body = json!({"device_id": "vdevo123", "on": true});

        let request = params.validate().unwrap();
        // Round-trip: the serialized body parses back to the same structure.
        let parsed: Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(parsed, json!({"device_id": "vdevo123", "on": true}));
    }

    #[test]
    fn test_nested_body_accepted() {
        let mut params = valid_params();
        params.body = json!({
            "commands": [{"code": "switch_led", "value": true}],
            "meta": {"tags": ["a", "b"], "depth": {"n": 1}}
        });
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_null_inside_body_rejected() {
        let mut params = valid_params();
        params.body = json!({"device_id": null});
        assert_eq!(params.validate().unwrap_err(), ParamError::Body);
    }

    #[test]
    fn test_primitive_body_rejected() {
        let mut params = valid_params();
        params.body = Value::String("just text".into());
        assert_eq!(params.validate().unwrap_err(), ParamError::Body);
    }

    #[test]
    fn test_null_body_rejected() {
        let mut params = valid_params();
        params.body = Value::Null;
        assert_eq!(params.validate().unwrap_err(), ParamError::Body);
    }

    #[test]
    fn test_method_round_trips() {
        for verb in METHODS {
            assert_eq!(verb.parse::<Method>().unwrap().as_str(), verb);
        }
    }
}
