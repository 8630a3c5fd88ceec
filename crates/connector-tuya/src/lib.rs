//! Host adapter for running the Tuya request core inside a flow runtime.
//!
//! The host delivers one message per invocation; the node merges per-call
//! overrides over its static configuration, executes the signed request,
//! and hands back either a forwarded message (payload replaced by the
//! result) or an error report, as explicit return values. Correlation
//! fields on the incoming message survive both outcomes untouched.

mod config;
mod message;
mod node;

pub use config::NodeConfig;
pub use message::FlowMessage;
pub use node::{NodeOutput, TuyaNode};
