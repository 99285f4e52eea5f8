//! JSON-facing classification for plan values.
//!
//! A plan arriving as JSON discriminates composites with a `"kind"` marker
//! field (`"ifElse"`, `"switch"`, `"merge"`, `"chain"`); a plain node is an
//! object carrying `name` and `type` with no marker; a fan-out is a JSON
//! array. The guards here are pure, total, O(1) checks that never throw: a
//! value that superficially resembles a composite but lacks its required node
//! field is simply not a match. Full validation happens in
//! [`Branch::from_value`], which reports malformed payloads precisely.

use serde_json::Value;
use std::collections::BTreeMap;

use super::branch::{Branch, BranchKind};
use super::composite::{IfElseComposite, MergeComposite, SwitchComposite};
use super::node::NodeInstance;
use crate::error::PlanError;

pub const IF_ELSE_KIND: &str = "ifElse";
pub const SWITCH_KIND: &str = "switch";
pub const MERGE_KIND: &str = "merge";
pub const CHAIN_KIND: &str = "chain";

fn marker(value: &Value) -> Option<&str> {
    value.get("kind").and_then(Value::as_str)
}

/// True exactly for objects marked as an if/else composite with an `if` node.
pub fn is_if_else(value: &Value) -> bool {
    marker(value) == Some(IF_ELSE_KIND) && value.get("if").is_some_and(Value::is_object)
}

/// True exactly for objects marked as a switch composite with a `switch` node.
/// Accepts both case representations (positional array and index map).
pub fn is_switch(value: &Value) -> bool {
    marker(value) == Some(SWITCH_KIND) && value.get("switch").is_some_and(Value::is_object)
}

/// True exactly for objects marked as a merge composite with a `merge` node.
pub fn is_merge(value: &Value) -> bool {
    marker(value) == Some(MERGE_KIND) && value.get("merge").is_some_and(Value::is_object)
}

/// True exactly for objects marked as a linear chain of nodes.
pub fn is_chain(value: &Value) -> bool {
    marker(value) == Some(CHAIN_KIND) && value.get("nodes").is_some_and(Value::is_array)
}

/// True for a plain node object: `name` and `type` strings, no `kind` marker.
pub fn is_node(value: &Value) -> bool {
    value.is_object()
        && marker(value).is_none()
        && value.get("name").is_some_and(Value::is_string)
        && value.get("type").is_some_and(Value::is_string)
}

/// Single classification pass over an arbitrary JSON value.
/// Returns `None` for anything that is not a recognizable branch shape.
pub fn classify(value: &Value) -> Option<BranchKind> {
    if value.is_array() {
        Some(BranchKind::FanOut)
    } else if is_if_else(value) {
        Some(BranchKind::IfElse)
    } else if is_switch(value) {
        Some(BranchKind::Switch)
    } else if is_merge(value) {
        Some(BranchKind::Merge)
    } else if is_chain(value) {
        Some(BranchKind::Chain)
    } else if is_node(value) {
        Some(BranchKind::Node)
    } else {
        None
    }
}

fn value_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn malformed(kind: &str, detail: impl Into<String>) -> PlanError {
    PlanError::MalformedComposite {
        kind: kind.to_string(),
        detail: detail.into(),
    }
}

fn node_field(value: &Value, kind: &str, field: &str) -> Result<NodeInstance, PlanError> {
    let raw = value
        .get(field)
        .ok_or_else(|| malformed(kind, format!("required field '{field}' is missing")))?;
    serde_json::from_value(raw.clone())
        .map_err(|e| malformed(kind, format!("field '{field}' is not a valid node: {e}")))
}

/// An optional branch slot: absent or JSON `null` means intentionally
/// unconnected, anything else must parse as a branch.
fn slot(value: Option<&Value>) -> Result<Option<Branch>, PlanError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => Branch::from_value(raw).map(Some),
    }
}

impl Branch {
    /// Parses an arbitrary JSON value into a branch.
    ///
    /// Values carrying a known `kind` marker are validated as that composite
    /// and fail with [`PlanError::MalformedComposite`] when their payload is
    /// wrong. Values of no recognizable shape (a bare number, a markerless
    /// object without `name`/`type`) fail with
    /// [`PlanError::UnrecognizedBranch`] rather than being dropped silently.
    pub fn from_value(value: &Value) -> Result<Branch, PlanError> {
        if let Value::Array(elements) = value {
            let mut slots = Vec::with_capacity(elements.len());
            for element in elements {
                slots.push(slot(Some(element))?);
            }
            return Ok(Branch::FanOut(slots));
        }

        match marker(value) {
            Some(IF_ELSE_KIND) => Ok(Branch::IfElse(Box::new(IfElseComposite {
                if_node: node_field(value, IF_ELSE_KIND, "if")?,
                true_branch: slot(value.get("true"))?,
                false_branch: slot(value.get("false"))?,
            }))),
            Some(SWITCH_KIND) => Ok(Branch::Switch(Box::new(parse_switch(value)?))),
            Some(MERGE_KIND) => Ok(Branch::Merge(Box::new(parse_merge(value)?))),
            Some(CHAIN_KIND) => Ok(Branch::Chain(parse_chain(value)?)),
            Some(other) => Err(PlanError::UnrecognizedBranch {
                shape: format!("object with unknown kind '{other}'"),
            }),
            None => {
                if is_node(value) {
                    let node: NodeInstance = serde_json::from_value(value.clone())
                        .map_err(|e| PlanError::Validation(format!("invalid node: {e}")))?;
                    Ok(Branch::Node(node))
                } else {
                    Err(PlanError::UnrecognizedBranch {
                        shape: value_shape(value).to_string(),
                    })
                }
            }
        }
    }
}

fn parse_switch(value: &Value) -> Result<SwitchComposite, PlanError> {
    let switch_node = node_field(value, SWITCH_KIND, "switch")?;
    let source = slot(value.get("source"))?;

    let mut cases: BTreeMap<u32, Branch> = BTreeMap::new();
    match value.get("cases") {
        None | Some(Value::Null) => {}
        // Positional form: index is the element's position, nulls keep theirs.
        Some(Value::Array(elements)) => {
            for (index, element) in elements.iter().enumerate() {
                if let Some(branch) = slot(Some(element))? {
                    cases.insert(index as u32, branch);
                }
            }
        }
        // Indexed form: keys are explicit output indices.
        Some(Value::Object(entries)) => {
            for (key, element) in entries {
                let index: u32 = key.parse().map_err(|_| {
                    malformed(SWITCH_KIND, format!("case key '{key}' is not an output index"))
                })?;
                if let Some(branch) = slot(Some(element))? {
                    cases.insert(index, branch);
                }
            }
        }
        Some(other) => {
            return Err(malformed(
                SWITCH_KIND,
                format!("'cases' must be an array or an index map, got {}", value_shape(other)),
            ));
        }
    }

    Ok(SwitchComposite {
        switch_node,
        source,
        cases,
    })
}

fn parse_merge(value: &Value) -> Result<MergeComposite, PlanError> {
    let merge_node = node_field(value, MERGE_KIND, "merge")?;
    let mut branches = Vec::new();
    match value.get("branches") {
        None | Some(Value::Null) => {}
        Some(Value::Array(elements)) => {
            for element in elements {
                branches.push(slot(Some(element))?);
            }
        }
        Some(other) => {
            return Err(malformed(
                MERGE_KIND,
                format!("'branches' must be an array, got {}", value_shape(other)),
            ));
        }
    }
    Ok(MergeComposite {
        merge_node,
        branches,
    })
}

fn parse_chain(value: &Value) -> Result<Vec<NodeInstance>, PlanError> {
    let elements = value
        .get("nodes")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed(CHAIN_KIND, "required field 'nodes' is missing or not an array"))?;
    elements
        .iter()
        .map(|element| {
            serde_json::from_value(element.clone())
                .map_err(|e| malformed(CHAIN_KIND, format!("chain step is not a valid node: {e}")))
        })
        .collect()
}
