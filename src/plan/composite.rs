use std::collections::BTreeMap;

use super::branch::Branch;
use super::node::NodeInstance;

/// Two-way conditional: output 0 carries the true branch, output 1 the false
/// branch. Either branch may be absent, which leaves that output unconnected.
#[derive(Debug, Clone, PartialEq)]
pub struct IfElseComposite {
    pub if_node: NodeInstance,
    pub true_branch: Option<Branch>,
    pub false_branch: Option<Branch>,
}

impl IfElseComposite {
    pub fn new(if_node: NodeInstance) -> Self {
        Self {
            if_node,
            true_branch: None,
            false_branch: None,
        }
    }

    pub fn when(mut self, branch: impl Into<Branch>) -> Self {
        self.true_branch = Some(branch.into());
        self
    }

    pub fn otherwise(mut self, branch: impl Into<Branch>) -> Self {
        self.false_branch = Some(branch.into());
        self
    }
}

/// Multi-way conditional: each case index is one output of the switch node.
///
/// Cases are held in canonical form as an explicit `output index -> Branch`
/// map, regardless of whether the caller supplied them positionally or by
/// index. Indices are absolute: a missing index stays missing, later cases are
/// never compacted downward.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchComposite {
    pub switch_node: NodeInstance,
    /// Optional upstream chain feeding the switch's input, materialized before
    /// the switch itself so a trigger can precede it in the graph.
    pub source: Option<Branch>,
    pub cases: BTreeMap<u32, Branch>,
}

impl SwitchComposite {
    pub fn new(switch_node: NodeInstance) -> Self {
        Self {
            switch_node,
            source: None,
            cases: BTreeMap::new(),
        }
    }

    /// Positional case list; `None` entries leave their output index
    /// unconnected without shifting the indices that follow.
    pub fn with_cases(switch_node: NodeInstance, cases: Vec<Option<Branch>>) -> Self {
        let mut composite = Self::new(switch_node);
        for (index, case) in cases.into_iter().enumerate() {
            if let Some(branch) = case {
                composite.cases.insert(index as u32, branch);
            }
        }
        composite
    }

    pub fn with_source(mut self, branch: impl Into<Branch>) -> Self {
        self.source = Some(branch.into());
        self
    }

    /// Explicit-index case, the builder form.
    pub fn case(mut self, output_index: u32, branch: impl Into<Branch>) -> Self {
        self.cases.insert(output_index, branch.into());
        self
    }
}

/// Join point: each entry in `branches` is wired forward into the merge node
/// at the input index given by its position. A `None` entry leaves that merge
/// input unconnected; positions are absolute and never compacted.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeComposite {
    pub merge_node: NodeInstance,
    pub branches: Vec<Option<Branch>>,
}

impl MergeComposite {
    pub fn new(merge_node: NodeInstance) -> Self {
        Self {
            merge_node,
            branches: Vec::new(),
        }
    }

    /// Appends a connected branch at the next merge input.
    pub fn branch(mut self, branch: impl Into<Branch>) -> Self {
        self.branches.push(Some(branch.into()));
        self
    }

    /// Appends an intentionally unconnected merge input.
    pub fn unconnected(mut self) -> Self {
        self.branches.push(None);
        self
    }
}
