use super::WorkflowPlan;
use crate::error::PlanError;

/// A trait for custom declarative formats that can be converted into a Kumiki
/// [`WorkflowPlan`].
///
/// This is the primary extension point for keeping the builder
/// format-agnostic: parse your own workflow description (JSON, YAML, a DSL)
/// into your own structs, then implement `IntoPlan` to translate them into the
/// canonical plan the graph builder consumes.
///
/// # Example
///
/// ```rust,no_run
/// use kumiki::prelude::*;
/// use kumiki::error::PlanError;
///
/// struct MyStep { name: String, kind: String }
/// struct MyPipeline { id: String, title: String, steps: Vec<MyStep> }
///
/// impl IntoPlan for MyPipeline {
///     fn into_plan(self) -> std::result::Result<WorkflowPlan, PlanError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|step| NodeInstance::new(&step.name, &step.kind))
///             .collect::<Vec<_>>();
///         Ok(WorkflowPlan::new(&self.id, &self.title).with_root(Branch::Chain(nodes)))
///     }
/// }
/// ```
pub trait IntoPlan {
    /// Consumes the object and converts it into a canonical workflow plan.
    fn into_plan(self) -> Result<WorkflowPlan, PlanError>;
}
