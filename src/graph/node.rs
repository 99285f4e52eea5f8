use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::plan::NodeInstance;

/// The default connection channel. The model supports arbitrary channel names,
/// but every composite wires through "main".
pub const MAIN_CONNECTION: &str = "main";

/// One inbound endpoint of a connection: which node, on which channel, at
/// which input index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionTarget {
    pub node: String,
    #[serde(rename = "type")]
    pub connection_type: String,
    pub index: u32,
}

impl ConnectionTarget {
    pub fn main(node: &str, input_index: u32) -> Self {
        Self {
            node: node.to_string(),
            connection_type: MAIN_CONNECTION.to_string(),
            index: input_index,
        }
    }
}

/// A node's outbound wiring: channel -> output index -> ordered targets.
///
/// An output index with no entry means "unconnected", never "index 0"; target
/// lists preserve the order connections were appended, since fan-out order is
/// observable at execution time.
pub type Connections = BTreeMap<String, BTreeMap<u32, Vec<ConnectionTarget>>>;

/// A node materialized into the graph: the caller's instance data plus the
/// outbound connection table, which may grow after creation (a branch node is
/// often registered before its downstream merge target is known).
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub instance: NodeInstance,
    pub connections: Connections,
}

impl GraphNode {
    pub fn new(instance: NodeInstance) -> Self {
        Self {
            instance,
            connections: Connections::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.instance.name
    }

    /// Appends a target to one output, creating the channel and index entries
    /// on first use so absent outputs stay absent.
    pub fn connect(&mut self, connection_type: &str, output_index: u32, target: ConnectionTarget) {
        self.connections
            .entry(connection_type.to_string())
            .or_default()
            .entry(output_index)
            .or_default()
            .push(target);
    }

    /// Registers a channel with no outputs yet. A merge node starts this way:
    /// branches connect into it, and its own outgoing wiring arrives later.
    pub fn ensure_channel(&mut self, connection_type: &str) {
        self.connections.entry(connection_type.to_string()).or_default();
    }
}
