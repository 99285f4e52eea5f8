//! End-to-end tests: JSON plan in, wire-format workflow out, and back again.
mod common;
use common::*;
use kumiki::error::PlanError;
use kumiki::graph::visualizer::render_workflow;
use kumiki::prelude::*;
use serde_json::json;

const PLAN_JSON: &str = r#"{
    "id": "wf-e2e",
    "name": "Order routing",
    "settings": { "executionOrder": "v1" },
    "root": {
        "kind": "switch",
        "switch": { "name": "Route", "type": "core.switch" },
        "source": {
            "kind": "chain",
            "nodes": [
                { "name": "Webhook", "type": "core.webhook" },
                { "name": "Validate", "type": "core.set" }
            ]
        },
        "cases": [
            {
                "kind": "ifElse",
                "if": { "name": "Check Priority", "type": "core.if" },
                "true": [
                    { "name": "Notify Sales", "type": "core.slack" },
                    { "name": "Log Lead", "type": "core.sheet" }
                ],
                "false": { "name": "Queue", "type": "core.noop" }
            },
            null,
            {
                "kind": "merge",
                "merge": { "name": "Join", "type": "core.merge" },
                "branches": [
                    { "name": "Fetch A", "type": "core.http" },
                    null,
                    { "name": "Fetch B", "type": "core.http" }
                ]
            }
        ]
    }
}"#;

#[test]
fn test_json_plan_builds_expected_graph() {
    let plan = WorkflowPlan::from_json(PLAN_JSON).expect("Failed to parse plan");
    let workflow = GraphBuilder::new(plan).build().expect("Failed to build");

    assert_eq!(workflow.id, "wf-e2e");
    assert_eq!(workflow.name, "Order routing");
    assert_eq!(workflow.settings, json!({ "executionOrder": "v1" }));
    assert_eq!(workflow.nodes.len(), 10);

    // Source chain feeds the switch's input.
    assert_eq!(
        targets(&workflow, "Validate", MAIN_CONNECTION, 0).unwrap()[0],
        ConnectionTarget::main("Route", 0)
    );

    // Case 0 attaches the nested if/else head; case 1 stays absent; case 2
    // attaches the merge head.
    assert_eq!(
        targets(&workflow, "Route", MAIN_CONNECTION, 0).unwrap()[0].node,
        "Check Priority"
    );
    assert!(targets(&workflow, "Route", MAIN_CONNECTION, 1).is_none());
    assert_eq!(
        targets(&workflow, "Route", MAIN_CONNECTION, 2).unwrap()[0].node,
        "Join"
    );

    // The true-branch fan-out preserves order.
    let fan_out = targets(&workflow, "Check Priority", MAIN_CONNECTION, 0).unwrap();
    assert_eq!(fan_out[0].node, "Notify Sales");
    assert_eq!(fan_out[1].node, "Log Lead");

    // Merge branches keep their absolute input indices across the gap.
    assert_eq!(
        targets(&workflow, "Fetch A", MAIN_CONNECTION, 0).unwrap()[0],
        ConnectionTarget::main("Join", 0)
    );
    assert_eq!(
        targets(&workflow, "Fetch B", MAIN_CONNECTION, 0).unwrap()[0],
        ConnectionTarget::main("Join", 2)
    );
}

#[test]
fn test_workflow_round_trips_through_json() {
    let plan = WorkflowPlan::from_json(PLAN_JSON).expect("Failed to parse plan");
    let workflow = GraphBuilder::new(plan).build().expect("Failed to build");

    let serialized = serde_json::to_string(&workflow).expect("Failed to serialize");
    let reparsed: Workflow = serde_json::from_str(&serialized).expect("Failed to deserialize");

    // No connection tuple gained or lost.
    assert_eq!(workflow.connection_tuples(), reparsed.connection_tuples());
    assert_eq!(workflow, reparsed);
}

#[test]
fn test_serialized_shape_matches_wire_format() {
    let plan = create_if_else_plan().with_pin_data(json!({ "Check": [{ "score": 10 }] }));
    let workflow = GraphBuilder::new(plan).build().expect("Failed to build");
    let value = serde_json::to_value(&workflow).expect("Failed to serialize");

    assert_eq!(value["nodes"][0]["name"], "Check");
    assert_eq!(value["nodes"][0]["type"], "core.if");
    assert_eq!(value["nodes"][0]["typeVersion"], 1.0);
    assert_eq!(
        value["connections"]["Check"]["main"]["0"][0],
        json!({ "node": "Notify", "type": "main", "index": 0 })
    );
    assert_eq!(value["pinData"]["Check"][0]["score"], 10);
}

#[test]
fn test_pin_data_is_omitted_when_absent() {
    let workflow = GraphBuilder::new(create_chain_plan())
        .build()
        .expect("Failed to build");
    let value = serde_json::to_value(&workflow).expect("Failed to serialize");
    assert!(value.get("pinData").is_none());
}

#[test]
fn test_visualizer_renders_adjacency() {
    let workflow = GraphBuilder::new(create_if_else_plan())
        .build()
        .expect("Failed to build");
    let rendered = render_workflow(&workflow);

    assert!(rendered.contains("Check [core.if]"));
    assert!(rendered.contains("main[0] -> Notify (input 0)"));
    assert!(rendered.contains("main[1] -> Archive (input 0)"));
}

struct Pipeline {
    id: String,
    steps: Vec<(String, String)>,
}

impl IntoPlan for Pipeline {
    fn into_plan(self) -> std::result::Result<WorkflowPlan, PlanError> {
        if self.steps.is_empty() {
            return Err(PlanError::Validation("pipeline has no steps".to_string()));
        }
        let nodes = self
            .steps
            .into_iter()
            .map(|(name, kind)| NodeInstance::new(&name, &kind))
            .collect::<Vec<_>>();
        Ok(WorkflowPlan::new(&self.id, "Pipeline").with_root(Branch::Chain(nodes)))
    }
}

#[test]
fn test_custom_format_through_into_plan() {
    let pipeline = Pipeline {
        id: "pipe-1".to_string(),
        steps: vec![
            ("Extract".to_string(), "core.http".to_string()),
            ("Load".to_string(), "core.postgres".to_string()),
        ],
    };

    let workflow = GraphBuilder::new(pipeline.into_plan().expect("conversion"))
        .build()
        .expect("Failed to build");
    assert_eq!(workflow.nodes.len(), 2);
    assert_eq!(
        targets(&workflow, "Extract", MAIN_CONNECTION, 0).unwrap()[0].node,
        "Load"
    );
}
