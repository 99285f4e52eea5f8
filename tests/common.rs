//! Common test utilities for building workflow plans and inspecting graphs.
use kumiki::prelude::*;

/// Shorthand for a node with default version and empty parameters.
#[allow(dead_code)]
pub fn node(name: &str, node_type: &str) -> NodeInstance {
    NodeInstance::new(name, node_type)
}

/// A flat chain plan: Trigger -> Transform -> Store.
#[allow(dead_code)]
pub fn create_chain_plan() -> WorkflowPlan {
    WorkflowPlan::new("wf-chain", "Chain").with_root(Branch::Chain(vec![
        node("Trigger", "core.webhook"),
        node("Transform", "core.set"),
        node("Store", "core.postgres"),
    ]))
}

/// An if/else plan with both branches present.
///
/// Logic: Check -> (true: Notify, false: Archive)
#[allow(dead_code)]
pub fn create_if_else_plan() -> WorkflowPlan {
    WorkflowPlan::new("wf-if", "Conditional").with_root(
        IfElseComposite::new(node("Check", "core.if"))
            .when(node("Notify", "core.slack"))
            .otherwise(node("Archive", "core.noop")),
    )
}

/// A switch plan with an absolute gap: cases `[A, null, B]`.
#[allow(dead_code)]
pub fn create_switch_plan() -> WorkflowPlan {
    WorkflowPlan::new("wf-switch", "Router").with_root(SwitchComposite::with_cases(
        node("Route", "core.switch"),
        vec![
            Some(node("Handle A", "core.set").into()),
            None,
            Some(node("Handle B", "core.set").into()),
        ],
    ))
}

/// A merge plan with an absolute gap: branches `[X, null, Y]`.
#[allow(dead_code)]
pub fn create_merge_plan() -> WorkflowPlan {
    WorkflowPlan::new("wf-merge", "Join").with_root(
        MergeComposite::new(node("Join", "core.merge"))
            .branch(node("X", "core.set"))
            .unconnected()
            .branch(node("Y", "core.set")),
    )
}

/// The ordered target list at one output of one node, if present.
#[allow(dead_code)]
pub fn targets<'a>(
    workflow: &'a Workflow,
    from: &str,
    connection_type: &str,
    output_index: u32,
) -> Option<&'a Vec<ConnectionTarget>> {
    workflow
        .connections
        .get(from)?
        .get(connection_type)?
        .get(&output_index)
}
