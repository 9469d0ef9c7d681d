//! Policy template assignment models

use super::common::{
    AssignmentTargetDetails, ErrorObject, First, Next, Previous, ResourceCreated,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Template version to assign
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentTemplateDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl AssignmentTemplateDetails {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            version: Some(version.into()),
        }
    }
}

/// Policy created in the target by an assignment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyAssignmentResourcePolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_created: Option<ResourceCreated>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<ErrorObject>,
}

/// Per-target outcome of an assignment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyAssignmentV1Resources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<AssignmentTargetDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<PolicyAssignmentResourcePolicy>,
}

/// Subject of a policy assignment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyAssignmentV1Subject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<String>,
}

/// Assignment of a policy template to a target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyAssignmentV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<AssignmentTargetDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
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
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<PolicyAssignmentV1Resources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<PolicyAssignmentV1Subject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<AssignmentTemplateDetails>,
    /// `in_progress`, `succeeded`, `succeed_with_errors` or `failed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Assignments returned by a list or create call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyAssignmentV1Collection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<First>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Next>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Previous>,
    #[serde(default)]
    pub assignments: Vec<PolicyAssignmentV1>,
}

/// Page type of the assignment listing
pub type PolicyTemplateAssignmentCollection = PolicyAssignmentV1Collection;

impl_page!(PolicyAssignmentV1Collection, assignments, PolicyAssignmentV1);
