//! Tests for the assembly engine: chains, node registration, and error paths.
mod common;
use common::*;
use kumiki::prelude::*;

#[test]
fn test_chain_of_n_nodes_forms_single_path() {
    let workflow = GraphBuilder::new(create_chain_plan())
        .build()
        .expect("Failed to build");

    assert_eq!(workflow.nodes.len(), 3);

    // N-1 connections, each at output 0 / input 0 on "main".
    let tuples = workflow.connection_tuples();
    assert_eq!(tuples.len(), 2);
    for tuple in &tuples {
        assert_eq!(tuple.connection_type, MAIN_CONNECTION);
        assert_eq!(tuple.output, 0);
        assert_eq!(tuple.input, 0);
    }

    let trigger = targets(&workflow, "Trigger", MAIN_CONNECTION, 0).expect("Trigger unwired");
    assert_eq!(trigger[0].node, "Transform");
    let transform = targets(&workflow, "Transform", MAIN_CONNECTION, 0).expect("Transform unwired");
    assert_eq!(transform[0].node, "Store");
    // The tail has no outgoing wiring.
    assert!(targets(&workflow, "Store", MAIN_CONNECTION, 0).is_none());
}

#[test]
fn test_empty_plan_builds_empty_workflow() {
    let workflow = GraphBuilder::new(WorkflowPlan::new("wf-empty", "Empty"))
        .build()
        .expect("Failed to build");
    assert!(workflow.nodes.is_empty());
    assert!(workflow.connections.is_empty());
}

#[test]
fn test_duplicate_node_name_is_fatal() {
    let plan = WorkflowPlan::new("wf-dup", "Duplicate").with_root(Branch::Chain(vec![
        node("Step", "core.set"),
        node("Step", "core.set"),
    ]));

    let result = GraphBuilder::new(plan).build();
    match result.err().expect("Expected an error") {
        GraphBuildError::DuplicateNodeName { name } => assert_eq!(name, "Step"),
        other => panic!("Expected DuplicateNodeName, got {other:?}"),
    }
}

#[test]
fn test_duplicate_name_across_composite_branches_is_fatal() {
    let plan = WorkflowPlan::new("wf-dup2", "Duplicate").with_root(
        IfElseComposite::new(node("Check", "core.if"))
            .when(node("Same", "core.set"))
            .otherwise(node("Same", "core.set")),
    );
    assert!(matches!(
        GraphBuilder::new(plan).build(),
        Err(GraphBuildError::DuplicateNodeName { .. })
    ));
}

#[test]
fn test_add_branch_returns_heads_in_slot_order() {
    let mut builder = GraphBuilder::new(WorkflowPlan::new("wf", "manual"));
    let ends = builder
        .add_branch(&Branch::FanOut(vec![
            Some(node("P", "core.set").into()),
            None,
            Some(node("Q", "core.set").into()),
        ]))
        .expect("Failed to add branch");

    let heads: Vec<_> = ends.iter().map(|e| e.head.as_str()).collect();
    assert_eq!(heads, vec!["P", "Q"]);
}

#[test]
fn test_empty_chain_resolves_to_no_heads() {
    let mut builder = GraphBuilder::new(WorkflowPlan::new("wf", "manual"));
    let ends = builder
        .add_branch(&Branch::Chain(Vec::new()))
        .expect("Empty chain must not be an error");
    assert!(ends.is_empty());
}

#[test]
fn test_chain_end_exposes_head_and_tail() {
    let mut builder = GraphBuilder::new(WorkflowPlan::new("wf", "manual"));
    let ends = builder
        .add_branch(&Branch::Chain(vec![
            node("First", "core.set"),
            node("Last", "core.set"),
        ]))
        .expect("Failed to add chain");
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].head, "First");
    assert_eq!(ends[0].tail, "Last");
}
