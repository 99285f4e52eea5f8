//! # Kumiki - Workflow Graph Construction Engine
//!
//! **Kumiki** turns a declarative, composable description of a workflow -
//! nodes plus control-flow composites (if/else, switch/case, merge) - into a
//! directed execution graph with explicit output/input wiring, ready for
//! serialization or execution by a downstream runtime.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal plan
//! model. The primary workflow is:
//!
//! 1.  **Describe**: build a tree of [`NodeInstance`]s and composites with the
//!     plan builders (or parse one from JSON via [`WorkflowPlan::from_json`],
//!     or adapt your own format through the [`IntoPlan`] trait).
//! 2.  **Assemble**: hand the plan to a [`GraphBuilder`], which expands every
//!     composite branch-by-branch into a node arena with typed, indexed
//!     connections.
//! 3.  **Serialize**: the resulting [`Workflow`] is the wire format - a flat
//!     `nodes` array plus a `connections` table - and derives
//!     `serde::Serialize`/`Deserialize`.
//!
//! [`NodeInstance`]: plan::NodeInstance
//! [`WorkflowPlan::from_json`]: plan::WorkflowPlan::from_json
//! [`IntoPlan`]: plan::IntoPlan
//! [`GraphBuilder`]: builder::GraphBuilder
//! [`Workflow`]: graph::Workflow
//!
//! ## Quick Start
//!
//! ```rust
//! use kumiki::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Describe: a webhook feeds a switch; its first case is an if-node
//!     // whose true branch fans out to two independent nodes.
//!     let plan = WorkflowPlan::new("wf-1", "Lead triage").with_root(
//!         SwitchComposite::new(NodeInstance::new("Route", "core.switch"))
//!             .with_source(NodeInstance::new("Webhook", "core.webhook"))
//!             .case(
//!                 0,
//!                 IfElseComposite::new(NodeInstance::new("Check Score", "core.if"))
//!                     .when(Branch::fan_out(vec![
//!                         NodeInstance::new("Notify Sales", "core.slack").into(),
//!                         NodeInstance::new("Log Lead", "core.sheet").into(),
//!                     ]))
//!                     .otherwise(NodeInstance::new("Archive", "core.noop")),
//!             ),
//!     );
//!
//!     // Assemble and serialize.
//!     let workflow = GraphBuilder::new(plan).build()?;
//!     let json = serde_json::to_string_pretty(&workflow)?;
//!     println!("{json}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Wiring rules
//!
//! - Output and input indices are independent per node; an output index with
//!   no entry means "unconnected", never "index 0".
//! - Branch, case, and merge-input positions are absolute. A `None` slot is
//!   intentionally unconnected and never shifts the indices that follow.
//! - Fan-out target lists preserve the order slots were supplied, since
//!   execution fan-out order can be observable.
//! - Construction errors (duplicate node names, unrecognizable branch values)
//!   propagate synchronously to the caller; a partially built graph is
//!   discarded, never serialized.

pub mod builder;
pub mod error;
pub mod graph;
pub mod plan;
pub mod prelude;
