//! Plain-text rendering of a built workflow's adjacency, for debugging and
//! the CLI's `--render text` mode.

use itertools::Itertools;

use super::workflow::Workflow;

/// Renders one line per node followed by an indented line per wired output.
///
/// ```text
/// Webhook [core.webhook]
///   main[0] -> Check Score (input 0)
/// ```
pub fn render_workflow(workflow: &Workflow) -> String {
    let mut lines = Vec::new();
    for node in &workflow.nodes {
        lines.push(format!("{} [{}]", node.name, node.node_type));
        if let Some(channels) = workflow.connections.get(&node.name) {
            for (connection_type, outputs) in channels {
                for (output, targets) in outputs {
                    let rendered = targets
                        .iter()
                        .map(|t| format!("{} (input {})", t.node, t.index))
                        .join(", ");
                    lines.push(format!("  {connection_type}[{output}] -> {rendered}"));
                }
            }
        }
    }
    lines.join("\n")
}
