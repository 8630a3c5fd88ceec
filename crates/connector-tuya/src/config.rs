//! Static node configuration.

use common::TuyaEnvironment;

/// Editor-configured defaults for the node.
///
/// Every field can be overridden per call by the incoming message. The
/// headers default is kept as free text the way a flow editor stores it;
/// it is JSON-parsed at request time.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub client_id: String,
    pub secret: String,
    pub server: String,
    pub path: String,
    pub method: String,
    /// Raw JSON string, e.g. `{"access_token":"..."}`. Empty means none.
    pub headers: Option<String>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            secret: String::new(),
            server: TuyaEnvironment::default().api_host().to_string(),
            path: String::new(),
            method: "GET".to_string(),
            headers: None,
        }
    }
}

impl NodeConfig {
    /// Config pre-targeted at a data center region.
    pub fn for_environment(environment: TuyaEnvironment) -> Self {
        Self {
            server: environment.api_host().to_string(),
            ..Self::default()
        }
    }
}
