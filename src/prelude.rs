//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the kumiki crate. Import this
//! module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use kumiki::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/plan.json")?;
//! let plan = WorkflowPlan::from_json(&json)?;
//! let workflow = GraphBuilder::new(plan).build()?;
//! println!("{}", serde_json::to_string_pretty(&workflow)?);
//! # Ok(())
//! # }
//! ```

// Assembly
pub use crate::builder::{BranchEnd, GraphBuilder};

// Plan model
pub use crate::plan::{
    Branch, BranchKind, IfElseComposite, IntoPlan, MergeComposite, NodeInstance, SwitchComposite,
    WorkflowPlan,
};

// Graph model and wire format
pub use crate::graph::{
    ConnectionTarget, ConnectionTuple, ConnectionsByNode, GraphNode, NodeMap, NodeRecord, Workflow,
    MAIN_CONNECTION,
};

// Error types
pub use crate::error::{GraphBuildError, PlanError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
