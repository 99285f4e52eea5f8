//! Merge expansion: branches wire forward *into* the merge node, the inverse
//! direction from if/else.

use super::GraphBuilder;
use crate::error::GraphBuildError;
use crate::graph::{ConnectionTarget, MAIN_CONNECTION};
use crate::plan::MergeComposite;

/// Registers the merge node, materializes each branch slot, and returns the
/// merge node's name as the composite's head.
///
/// The merge node is registered first with an empty "main" channel: whatever
/// continues the chain after the composite supplies its outgoing wiring. Each
/// branch's exit node gains a "main" output-0 connection targeting the merge
/// node at the input index given by the branch's position. Positions are
/// absolute: a `None` at position 1 leaves merge input 1 unconnected even
/// though positions 0 and 2 are wired.
pub(super) fn expand(
    builder: &mut GraphBuilder,
    composite: &MergeComposite,
) -> Result<String, GraphBuildError> {
    let merge_name = builder.add_node(&composite.merge_node)?;
    builder.ensure_channel(&merge_name, MAIN_CONNECTION)?;

    for (position, slot) in composite.branches.iter().enumerate() {
        let Some(branch) = slot else {
            continue;
        };
        for end in builder.add_branch(branch)? {
            builder.connect(
                &end.tail,
                MAIN_CONNECTION,
                0,
                ConnectionTarget::main(&merge_name, position as u32),
            )?;
        }
    }

    Ok(merge_name)
}
