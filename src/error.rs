use thiserror::Error;

/// Errors that can occur while interpreting a declarative workflow plan.
#[derive(Error, Debug, Clone)]
pub enum PlanError {
    #[error("Failed to parse plan JSON: {0}")]
    JsonParse(String),

    #[error("Composite '{kind}' is malformed: {detail}")]
    MalformedComposite { kind: String, detail: String },

    #[error(
        "Branch value of shape '{shape}' is not a node, a chain, a fan-out array, or a known composite"
    )]
    UnrecognizedBranch { shape: String },

    #[error("Invalid plan data: {0}")]
    Validation(String),
}

/// Errors that can occur while assembling the execution graph from a plan.
#[derive(Error, Debug, Clone)]
pub enum GraphBuildError {
    #[error("A node named '{name}' is already registered in this graph")]
    DuplicateNodeName { name: String },

    #[error("Node '{name}' is not in the graph, but a connection from it was requested")]
    UnknownNode { name: String },
}
