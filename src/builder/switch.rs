//! Switch/case expansion: each case index is one output of the switch node;
//! an optional source chain feeds the switch's input from upstream.

use super::GraphBuilder;
use crate::error::GraphBuildError;
use crate::graph::{ConnectionTarget, MAIN_CONNECTION};
use crate::plan::SwitchComposite;

/// Registers the switch node, wires its source and cases, and returns the
/// switch node's name as the composite's head.
///
/// Case indices are absolute. A case absent from the map gets no entry at its
/// output index, and later indices are never compacted downward. A case whose
/// fan-out resolves to no heads likewise leaves its output index absent.
pub(super) fn expand(
    builder: &mut GraphBuilder,
    composite: &SwitchComposite,
) -> Result<String, GraphBuildError> {
    // The upstream source is materialized first so a trigger chain precedes
    // the switch in the arena.
    let source_ends = match &composite.source {
        Some(branch) => builder.add_branch(branch)?,
        None => Vec::new(),
    };

    let switch_name = builder.add_node(&composite.switch_node)?;

    // Source exits feed the switch's input 0; cases feed its outputs. The two
    // never collide because cases only append to the switch's own table.
    for end in source_ends {
        builder.connect(
            &end.tail,
            MAIN_CONNECTION,
            0,
            ConnectionTarget::main(&switch_name, 0),
        )?;
    }

    for (&output_index, case) in &composite.cases {
        for end in builder.add_branch(case)? {
            builder.connect(
                &switch_name,
                MAIN_CONNECTION,
                output_index,
                ConnectionTarget::main(&end.head, 0),
            )?;
        }
    }

    Ok(switch_name)
}
