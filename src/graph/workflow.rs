use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::node::Connections;
use super::store::NodeMap;

/// Serialized wiring for the whole graph: node name -> its connection table.
pub type ConnectionsByNode = BTreeMap<String, Connections>;

/// One node entry in the serialized `nodes` array; mirrors the instance data
/// the caller supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(rename = "typeVersion")]
    pub type_version: f64,
    pub parameters: Value,
}

/// The wire format of a fully built graph.
///
/// A `Workflow` is a pure projection of the final node arena: producing it
/// performs no further graph mutation, and it requires a successfully
/// completed build (a map abandoned after a construction error must be
/// discarded, not serialized).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub nodes: Vec<NodeRecord>,
    pub connections: ConnectionsByNode,
    #[serde(default = "empty_settings")]
    pub settings: Value,
    #[serde(rename = "pinData", default, skip_serializing_if = "Option::is_none")]
    pub pin_data: Option<Value>,
}

fn empty_settings() -> Value {
    serde_json::json!({})
}

/// A flattened connection edge, convenient for assertions and diffing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ConnectionTuple {
    pub from: String,
    pub connection_type: String,
    pub output: u32,
    pub to: String,
    pub input: u32,
}

impl Workflow {
    pub(crate) fn from_parts(
        id: String,
        name: String,
        map: &NodeMap,
        settings: Value,
        pin_data: Option<Value>,
    ) -> Self {
        let nodes = map
            .iter()
            .map(|node| NodeRecord {
                name: node.instance.name.clone(),
                node_type: node.instance.node_type.clone(),
                type_version: node.instance.type_version,
                parameters: node.instance.parameters.clone(),
            })
            .collect();

        let connections = map
            .iter()
            .map(|node| (node.instance.name.clone(), node.connections.clone()))
            .collect();

        Self {
            id,
            name,
            nodes,
            connections,
            settings,
            pin_data,
        }
    }

    /// Flattens the connection table into sorted `(from, type, output, to,
    /// input)` tuples, useful for round-trip verification.
    pub fn connection_tuples(&self) -> Vec<ConnectionTuple> {
        self.connections
            .iter()
            .flat_map(|(from, channels)| {
                channels.iter().flat_map(move |(connection_type, outputs)| {
                    outputs.iter().flat_map(move |(&output, targets)| {
                        targets.iter().map(move |target| ConnectionTuple {
                            from: from.clone(),
                            connection_type: connection_type.clone(),
                            output,
                            to: target.node.clone(),
                            input: target.index,
                        })
                    })
                })
            })
            .sorted()
            .collect()
    }
}
