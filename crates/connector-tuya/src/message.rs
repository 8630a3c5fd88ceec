//! Flow message shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One message flowing through the node.
///
/// `payload` is the request body (the empty string means no body) and is
/// replaced by the result on a forwarded message. The override fields are
/// untyped on purpose: presence wins over the config default, and the core
/// validates the value. Any other field on the message is captured in
/// `extra` and threaded back to the outcome unmodified, so hosts can hang
/// correlation data (topics, ids) on the message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowMessage {
    #[serde(default = "empty_payload")]
    pub payload: Value,

    #[serde(rename = "clientId", default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn empty_payload() -> Value {
    Value::String(String::new())
}

impl Default for FlowMessage {
    fn default() -> Self {
        Self {
            payload: empty_payload(),
            client_id: None,
            secret: None,
            server: None,
            path: None,
            method: None,
            headers: None,
            extra: Map::new(),
        }
    }
}

impl FlowMessage {
    /// A message carrying only a payload.
    pub fn with_payload(payload: Value) -> Self {
        Self {
            payload,
            ..Self::default()
        }
    }
}
