//! Response envelope classification.

use serde_json::Value;

/// The platform's fixed response wrapper, or the raw JSON when the body
/// matches neither shape.
///
/// Classification is driven solely by the `success` boolean; a body without
/// it, or with the wrong companion fields, is passed through verbatim
/// rather than treated as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `{"success": true, "result": {...}}`
    Success { result: Value },
    /// `{"success": false, "code": n, "msg": "..."}`
    Failure { code: i64, msg: String },
    /// Valid JSON of any other shape, untouched.
    Other(Value),
}

impl Envelope {
    /// Classify a parsed response body.
    pub fn classify(mut data: Value) -> Self {
        let Some(success) = data.get("success").and_then(Value::as_bool) else {
            return Self::Other(data);
        };

        if success {
            if let Some(result) = data.get_mut("result").filter(|r| r.is_object()) {
                return Self::Success {
                    result: result.take(),
                };
            }
            Self::Other(data)
        } else {
            let code = data.get("code").and_then(Value::as_i64);
            let msg = data.get("msg").and_then(Value::as_str);

            match (code, msg) {
                (Some(code), Some(msg)) => Self::Failure {
                    code,
                    msg: msg.to_string(),
                },
                _ => Self::Other(data),
            }
        }
    }
}
