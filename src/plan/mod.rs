//! The declarative input model: nodes, branches, and control-flow composites.

pub mod branch;
pub mod classify;
pub mod composite;
pub mod conversion;
pub mod node;

pub use branch::*;
pub use composite::*;
pub use conversion::*;
pub use node::*;

use serde_json::Value;

use crate::error::PlanError;

/// The complete, canonical description of one workflow, ready for assembly.
///
/// Built fresh per graph construction; nothing persists between builds.
#[derive(Debug, Clone, Default)]
pub struct WorkflowPlan {
    pub id: String,
    pub name: String,
    pub root: Option<Branch>,
    pub settings: Value,
    pub pin_data: Option<Value>,
}

impl WorkflowPlan {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            root: None,
            settings: serde_json::json!({}),
            pin_data: None,
        }
    }

    pub fn with_root(mut self, root: impl Into<Branch>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_settings(mut self, settings: Value) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_pin_data(mut self, pin_data: Value) -> Self {
        self.pin_data = Some(pin_data);
        self
    }

    /// Parses a plan document of the shape
    /// `{ "id", "name", "root"?, "settings"?, "pinData"? }`,
    /// where `root` is any branch value accepted by [`Branch::from_value`].
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        let raw: Value = serde_json::from_str(json).map_err(|e| PlanError::JsonParse(e.to_string()))?;
        Self::from_value(&raw)
    }

    pub fn from_value(raw: &Value) -> Result<Self, PlanError> {
        let id = raw
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| PlanError::Validation("plan is missing a string 'id'".to_string()))?;
        let name = raw
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| PlanError::Validation("plan is missing a string 'name'".to_string()))?;

        let root = match raw.get("root") {
            None | Some(Value::Null) => None,
            Some(value) => Some(Branch::from_value(value)?),
        };

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            root,
            settings: raw.get("settings").cloned().unwrap_or_else(|| serde_json::json!({})),
            pin_data: raw.get("pinData").filter(|v| !v.is_null()).cloned(),
        })
    }
}
