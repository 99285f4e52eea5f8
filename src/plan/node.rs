use serde::{Deserialize, Serialize};

/// A single node description supplied by the caller.
///
/// The builder treats the type tag and parameter bag as opaque; identity is by
/// `name`, which must be unique within one graph build. Instances are never
/// mutated by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInstance {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(rename = "typeVersion", alias = "type_version", default = "default_version")]
    pub type_version: f64,
    #[serde(default = "empty_parameters")]
    pub parameters: serde_json::Value,
}

fn default_version() -> f64 {
    1.0
}

fn empty_parameters() -> serde_json::Value {
    serde_json::json!({})
}

impl NodeInstance {
    pub fn new(name: &str, node_type: &str) -> Self {
        Self {
            name: name.to_string(),
            node_type: node_type.to_string(),
            type_version: default_version(),
            parameters: empty_parameters(),
        }
    }

    pub fn with_version(mut self, type_version: f64) -> Self {
        self.type_version = type_version;
        self
    }

    pub fn with_parameters(mut self, parameters: serde_json::Value) -> Self {
        self.parameters = parameters;
        self
    }
}
