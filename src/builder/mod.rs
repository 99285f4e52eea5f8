//! The assembly engine: walks a declarative plan and materializes it into the
//! node arena, one branch at a time.
//!
//! Construction is a single synchronous call stack. `add_branch` recursion
//! depth equals the nesting depth of the plan, and the arena is exclusively
//! owned by the in-flight build, so there is no shared mutation to guard
//! against. On error the partially built arena is dropped with the builder;
//! there is no rollback and no reuse.

mod if_else;
mod merge;
mod switch;

use crate::error::GraphBuildError;
use crate::graph::{ConnectionTarget, GraphNode, NodeMap, Workflow, MAIN_CONNECTION};
use crate::plan::{Branch, NodeInstance, WorkflowPlan};

/// The attachment points of one materialized branch.
///
/// `head` is where inbound connections from upstream land; `tail` is the exit
/// node that wires forward into a downstream switch or merge. For a single
/// node or a composite the two coincide; for a chain they are its first and
/// last nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchEnd {
    pub head: String,
    pub tail: String,
}

impl BranchEnd {
    fn single(name: String) -> Self {
        Self {
            head: name.clone(),
            tail: name,
        }
    }
}

/// Drives one graph build: owns the node arena, expands composites, and
/// finally projects the arena into the wire format.
pub struct GraphBuilder {
    plan: WorkflowPlan,
    map: NodeMap,
}

impl GraphBuilder {
    pub fn new(plan: WorkflowPlan) -> Self {
        Self {
            plan,
            map: NodeMap::new(),
        }
    }

    /// Expands the plan's root branch (if any) and serializes the result.
    pub fn build(mut self) -> Result<Workflow, GraphBuildError> {
        if let Some(root) = self.plan.root.take() {
            self.add_branch(&root)?;
        }
        Ok(Workflow::from_parts(
            self.plan.id,
            self.plan.name,
            &self.map,
            self.plan.settings,
            self.plan.pin_data,
        ))
    }

    /// Registers a single node instance and returns its assigned name.
    pub fn add_node(&mut self, instance: &NodeInstance) -> Result<String, GraphBuildError> {
        self.map.insert(GraphNode::new(instance.clone()))
    }

    /// Materializes any branch shape into the graph and returns its attachment
    /// points, one per independent head.
    ///
    /// A fan-out yields one entry per connected slot, in slot order; a fan-out
    /// whose every slot is `None` yields no entries, which callers treat as
    /// "leave the slot unconnected" rather than an error.
    pub fn add_branch(&mut self, branch: &Branch) -> Result<Vec<BranchEnd>, GraphBuildError> {
        match branch {
            Branch::Node(instance) => {
                let name = self.add_node(instance)?;
                Ok(vec![BranchEnd::single(name)])
            }
            Branch::Chain(nodes) => self.add_chain(nodes),
            Branch::FanOut(slots) => {
                let mut ends = Vec::new();
                for slot in slots.iter().flatten() {
                    ends.extend(self.add_branch(slot)?);
                }
                Ok(ends)
            }
            Branch::IfElse(composite) => {
                let head = if_else::expand(self, composite)?;
                Ok(vec![BranchEnd::single(head)])
            }
            Branch::Switch(composite) => {
                let head = switch::expand(self, composite)?;
                Ok(vec![BranchEnd::single(head)])
            }
            Branch::Merge(composite) => {
                let head = merge::expand(self, composite)?;
                Ok(vec![BranchEnd::single(head)])
            }
        }
    }

    /// Materializes a linear chain: every step at output 0 / input 0 on the
    /// "main" channel. An empty chain resolves to no attachment points.
    fn add_chain(&mut self, nodes: &[NodeInstance]) -> Result<Vec<BranchEnd>, GraphBuildError> {
        let Some(first) = nodes.first() else {
            return Ok(Vec::new());
        };

        let head = self.add_node(first)?;
        let mut tail = head.clone();
        for instance in &nodes[1..] {
            let next = self.add_node(instance)?;
            self.connect(&tail, MAIN_CONNECTION, 0, ConnectionTarget::main(&next, 0))?;
            tail = next;
        }
        Ok(vec![BranchEnd { head, tail }])
    }

    /// Appends an outbound connection to a node already in the arena.
    pub(crate) fn connect(
        &mut self,
        from: &str,
        connection_type: &str,
        output_index: u32,
        target: ConnectionTarget,
    ) -> Result<(), GraphBuildError> {
        let node = self
            .map
            .get_mut(from)
            .ok_or_else(|| GraphBuildError::UnknownNode {
                name: from.to_string(),
            })?;
        node.connect(connection_type, output_index, target);
        Ok(())
    }

    /// Registers a connection channel with no outputs on a node already in
    /// the arena.
    pub(crate) fn ensure_channel(
        &mut self,
        name: &str,
        connection_type: &str,
    ) -> Result<(), GraphBuildError> {
        let node = self
            .map
            .get_mut(name)
            .ok_or_else(|| GraphBuildError::UnknownNode {
                name: name.to_string(),
            })?;
        node.ensure_channel(connection_type);
        Ok(())
    }
}
