use super::composite::{IfElseComposite, MergeComposite, SwitchComposite};
use super::node::NodeInstance;

/// A slot's filler inside a plan: a single node, a linear chain, a parallel
/// fan-out of further branches, or a nested control-flow composite.
///
/// The enum is closed, so classification is exhaustive by construction; there
/// is no duck-typed guard probing and no handler priority ordering.
#[derive(Debug, Clone, PartialEq)]
pub enum Branch {
    Node(NodeInstance),
    Chain(Vec<NodeInstance>),
    /// Parallel fan-out. A `None` slot is intentionally unconnected and must
    /// not shift the positions of later slots.
    FanOut(Vec<Option<Branch>>),
    IfElse(Box<IfElseComposite>),
    Switch(Box<SwitchComposite>),
    Merge(Box<MergeComposite>),
}

/// The variant tag of a [`Branch`], produced by a single classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    Node,
    Chain,
    FanOut,
    IfElse,
    Switch,
    Merge,
}

impl Branch {
    pub fn kind(&self) -> BranchKind {
        match self {
            Branch::Node(_) => BranchKind::Node,
            Branch::Chain(_) => BranchKind::Chain,
            Branch::FanOut(_) => BranchKind::FanOut,
            Branch::IfElse(_) => BranchKind::IfElse,
            Branch::Switch(_) => BranchKind::Switch,
            Branch::Merge(_) => BranchKind::Merge,
        }
    }

    /// Convenience: a fan-out built from plain branches, all connected.
    pub fn fan_out(branches: Vec<Branch>) -> Self {
        Branch::FanOut(branches.into_iter().map(Some).collect())
    }
}

impl From<NodeInstance> for Branch {
    fn from(node: NodeInstance) -> Self {
        Branch::Node(node)
    }
}

impl From<Vec<NodeInstance>> for Branch {
    fn from(nodes: Vec<NodeInstance>) -> Self {
        Branch::Chain(nodes)
    }
}

impl From<IfElseComposite> for Branch {
    fn from(composite: IfElseComposite) -> Self {
        Branch::IfElse(Box::new(composite))
    }
}

impl From<SwitchComposite> for Branch {
    fn from(composite: SwitchComposite) -> Self {
        Branch::Switch(Box::new(composite))
    }
}

impl From<MergeComposite> for Branch {
    fn from(composite: MergeComposite) -> Self {
        Branch::Merge(Box::new(composite))
    }
}
