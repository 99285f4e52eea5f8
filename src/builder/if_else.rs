//! If/else expansion: output 0 carries the true branch, output 1 the false
//! branch.

use super::GraphBuilder;
use crate::error::GraphBuildError;
use crate::graph::{ConnectionTarget, MAIN_CONNECTION};
use crate::plan::{Branch, IfElseComposite};

pub(super) const TRUE_OUTPUT: u32 = 0;
pub(super) const FALSE_OUTPUT: u32 = 1;

/// Registers the if-node, wires both branch slots, and returns the if-node's
/// name as the composite's head.
///
/// Both branches absent is legal: the node is added with no outgoing
/// connections. A branch that resolves to no heads (an all-`None` fan-out)
/// leaves its output index absent, not present with an empty target list.
pub(super) fn expand(
    builder: &mut GraphBuilder,
    composite: &IfElseComposite,
) -> Result<String, GraphBuildError> {
    let if_name = builder.add_node(&composite.if_node)?;
    wire_output(builder, &if_name, TRUE_OUTPUT, composite.true_branch.as_ref())?;
    wire_output(builder, &if_name, FALSE_OUTPUT, composite.false_branch.as_ref())?;
    Ok(if_name)
}

fn wire_output(
    builder: &mut GraphBuilder,
    if_name: &str,
    output_index: u32,
    branch: Option<&Branch>,
) -> Result<(), GraphBuildError> {
    let Some(branch) = branch else {
        return Ok(());
    };
    for end in builder.add_branch(branch)? {
        builder.connect(
            if_name,
            MAIN_CONNECTION,
            output_index,
            ConnectionTarget::main(&end.head, 0),
        )?;
    }
    Ok(())
}
