//! The node itself: config + core client, one outcome per input message.

use crate::config::NodeConfig;
use crate::message::FlowMessage;
use serde_json::Value;
use tuya_rest::{RequestParams, TuyaRestClient, TuyaRestError};

/// Outcome of one invocation, mirroring the host's send/error channels.
#[derive(Debug)]
pub enum NodeOutput {
    /// Forward downstream: the original message with the payload replaced
    /// by the platform's result.
    Send(FlowMessage),
    /// Report through the host's error channel: a human-readable message
    /// plus the original message carrying structured details under
    /// `errorObject`.
    Error {
        message: String,
        msg: Box<FlowMessage>,
    },
}

/// A configured Tuya API node.
pub struct TuyaNode {
    config: NodeConfig,
    client: TuyaRestClient,
}

impl TuyaNode {
    /// Create a node from its static configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: NodeConfig) -> Result<Self, TuyaRestError> {
        Ok(Self {
            config,
            client: TuyaRestClient::new()?,
        })
    }

    /// Merge per-call overrides over the config defaults.
    ///
    /// A field present on the message wins even when its value is invalid;
    /// validation then reports that value. An empty headers default counts
    /// as absent.
    fn build_params(&self, msg: &FlowMessage) -> RequestParams {
        let config = &self.config;

        RequestParams {
            client_id: override_or(&msg.client_id, &config.client_id),
            secret: override_or(&msg.secret, &config.secret),
            server: override_or(&msg.server, &config.server),
            path: override_or(&msg.path, &config.path),
            method: override_or(&msg.method, &config.method),
            headers: msg.headers.clone().or_else(|| {
                config
                    .headers
                    .clone()
                    .filter(|raw| !raw.is_empty())
                    .map(Value::String)
            }),
            body: msg.payload.clone(),
        }
    }

    /// Handle one input message.
    ///
    /// Exactly one outcome per message; concurrent invocations are
    /// independent, and each message's correlation fields come back on its
    /// own outcome.
    pub async fn on_input(&self, msg: FlowMessage) -> NodeOutput {
        let params = self.build_params(&msg);

        match self.client.execute(params).await {
            Ok(payload) => {
                let mut out = msg;
                out.payload = payload;
                NodeOutput::Send(out)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Request failed");
                let message = err.to_string();
                let mut out = msg;
                out.extra.insert("errorObject".to_string(), err.details());
                NodeOutput::Error {
                    message,
                    msg: Box::new(out),
                }
            }
        }
    }
}

fn override_or(value: &Option<Value>, default: &str) -> Value {
    value
        .clone()
        .unwrap_or_else(|| Value::String(default.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_config() -> NodeConfig {
        NodeConfig {
            client_id: "cfg_client".into(),
            secret: "cfg_secret".into(),
            server: "openapi.tuyacn.com".into(),
            path: "/v1.0/token?grant_type=1".into(),
            method: "GET".into(),
            headers: Some(r#"{"access_token":"cfg_token"}"#.into()),
        }
    }

    #[test]
    fn test_defaults_come_from_config() {
        let node = TuyaNode::new(test_config()).unwrap();
        let params = node.build_params(&FlowMessage::default());

        assert_eq!(params.client_id, json!("cfg_client"));
        assert_eq!(params.method, json!("GET"));
        assert_eq!(
            params.headers,
            Some(json!(r#"{"access_token":"cfg_token"}"#))
        );
        assert_eq!(params.body, json!(""));
    }

    #[test]
    fn test_message_overrides_win() {
        let node = TuyaNode::new(test_config()).unwrap();

        let mut msg = FlowMessage::default();
        msg.client_id = Some(json!("msg_client"));
        msg.method = Some(json!("POST"));
        msg.headers = Some(json!({"access_token": "msg_token"}));
        msg.payload = json!({"on": true});

        let params = node.build_params(&msg);
        assert_eq!(params.client_id, json!("msg_client"));
        assert_eq!(params.method, json!("POST"));
        assert_eq!(params.headers, Some(json!({"access_token": "msg_token"})));
        assert_eq!(params.body, json!({"on": true}));
        // Untouched fields still fall back to config.
        assert_eq!(params.secret, json!("cfg_secret"));
    }

    #[test]
    fn test_invalid_override_still_wins() {
        // Presence beats the default even when the value will fail
        // validation downstream.
        let node = TuyaNode::new(test_config()).unwrap();

        let mut msg = FlowMessage::default();
        msg.client_id = Some(Value::Null);

        let params = node.build_params(&msg);
        assert_eq!(params.client_id, Value::Null);
    }

    #[test]
    fn test_empty_headers_config_is_absent() {
        let mut config = test_config();
        config.headers = Some(String::new());

        let node = TuyaNode::new(config).unwrap();
        let params = node.build_params(&FlowMessage::default());
        assert_eq!(params.headers, None);
    }
}
