//! Action control template and assignment models

use super::common::{
    AssignmentTargetDetails, ErrorObject, First, Next, Previous, ResourceCreated,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Actions of a service that a template restricts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateActionControl {
    pub service_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub actions: Vec<String>,
}

impl TemplateActionControl {
    pub fn new(service_name: impl Into<String>, actions: Vec<String>) -> Self {
        Self {
            service_name: service_name.into(),
            description: None,
            actions,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A versioned action control template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionControlTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_control: Option<TemplateActionControl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by_id: Option<String>,
}

/// One page of action control templates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionControlTemplateCollection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<First>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Next>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Previous>,
    #[serde(default)]
    pub action_control_templates: Vec<ActionControlTemplate>,
}

/// One page of versions of an action control template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionControlTemplateVersionsCollection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<First>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Next>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Previous>,
    #[serde(default)]
    pub versions: Vec<ActionControlTemplate>,
}

/// Template version to assign
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionControlAssignmentTemplate {
    pub id: String,
    pub version: String,
}

impl ActionControlAssignmentTemplate {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }
}

/// Action control created in the target by an assignment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionControlAssignmentResourceActionControl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_created: Option<ResourceCreated>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<ErrorObject>,
}

/// Per-target outcome of an action control assignment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionControlAssignmentResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<AssignmentTargetDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_control: Option<ActionControlAssignmentResourceActionControl>,
}

/// Assignment of an action control template to a target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionControlAssignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<AssignmentTargetDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<ActionControlAssignmentTemplate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ActionControlAssignmentResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by_id: Option<String>,
}

/// Action control assignments returned by a list or create call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionControlAssignmentCollection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<First>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Next>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Previous>,
    #[serde(default)]
    pub assignments: Vec<ActionControlAssignment>,
}

impl_page!(
    ActionControlTemplateCollection,
    action_control_templates,
    ActionControlTemplate
);
impl_page!(
    ActionControlTemplateVersionsCollection,
    versions,
    ActionControlTemplate
);
impl_page!(
    ActionControlAssignmentCollection,
    assignments,
    ActionControlAssignment
);
