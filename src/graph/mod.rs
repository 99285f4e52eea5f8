//! The materialized output model: graph nodes, the node arena, and the wire
//! format.

pub mod node;
pub mod store;
pub mod visualizer;
pub mod workflow;

pub use node::*;
pub use store::*;
pub use workflow::*;
