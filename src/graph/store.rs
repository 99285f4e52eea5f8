use ahash::AHashMap;

use super::node::GraphNode;
use crate::error::GraphBuildError;

/// The node arena for one in-progress build: insertion-ordered storage plus a
/// name index. Owned exclusively by a single [`GraphBuilder`] call, so no
/// locking is involved.
///
/// [`GraphBuilder`]: crate::builder::GraphBuilder
#[derive(Debug, Default)]
pub struct NodeMap {
    nodes: Vec<GraphNode>,
    index: AHashMap<String, usize>,
}

impl NodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node under its name and returns that name.
    ///
    /// Re-registering a name is a fatal construction error: overwriting would
    /// corrupt connections already recorded against the old entry.
    pub fn insert(&mut self, node: GraphNode) -> Result<String, GraphBuildError> {
        let name = node.name().to_string();
        if self.index.contains_key(&name) {
            return Err(GraphBuildError::DuplicateNodeName { name });
        }
        self.index.insert(name.clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(name)
    }

    pub fn get(&self, name: &str) -> Option<&GraphNode> {
        self.index.get(name).map(|&i| &self.nodes[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut GraphNode> {
        self.index.get(name).map(|&i| &mut self.nodes[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter()
    }
}
