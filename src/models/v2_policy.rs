//! Access policy models (v2)
//!
//! v2 policies use `key`/`operator`/`value` attributes, a `control` block
//! instead of a role list, and an optional condition `rule`.

use super::common::{First, Next, Previous, TemplateMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attribute of a v2 policy subject
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct V2PolicySubjectAttribute {
    pub key: String,
    pub operator: String,
    /// String, boolean or list depending on the operator
    pub value: Value,
}

impl V2PolicySubjectAttribute {
    pub fn new(key: impl Into<String>, operator: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// Subject of a v2 policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct V2PolicySubject {
    #[serde(default)]
    pub attributes: Vec<V2PolicySubjectAttribute>,
}

impl V2PolicySubject {
    pub fn new(attributes: Vec<V2PolicySubjectAttribute>) -> Self {
        Self { attributes }
    }
}

/// Attribute of a v2 policy resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct V2PolicyResourceAttribute {
    pub key: String,
    pub operator: String,
    pub value: Value,
}

impl V2PolicyResourceAttribute {
    pub fn new(key: impl Into<String>, operator: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// Access management tag of a v2 policy resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct V2PolicyResourceTag {
    pub key: String,
    pub value: String,
    pub operator: String,
}

impl V2PolicyResourceTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            operator: operator.into(),
        }
    }
}

/// Resource of a v2 policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct V2PolicyResource {
    #[serde(default)]
    pub attributes: Vec<V2PolicyResourceAttribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<V2PolicyResourceTag>,
}

impl V2PolicyResource {
    pub fn new(attributes: Vec<V2PolicyResourceAttribute>) -> Self {
        Self {
            attributes,
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<V2PolicyResourceTag>) -> Self {
        self.tags = tags;
        self
    }
}

/// Role reference inside a grant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roles {
    pub role_id: String,
}

impl Roles {
    pub fn new(role_id: impl Into<String>) -> Self {
        Self {
            role_id: role_id.into(),
        }
    }
}

/// Roles granted by a policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grant {
    pub roles: Vec<Roles>,
}

/// What a v2 policy allows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub grant: Grant,
}

impl Control {
    /// Control granting the given role CRNs
    pub fn grant_roles<I, S>(role_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            grant: Grant {
                roles: role_ids.into_iter().map(Roles::new).collect(),
            },
        }
    }
}

/// Action of a role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleAction {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
}

/// Role with its display details, as returned in policy responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRoles {
    pub role_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<RoleAction>,
}

/// Grant as returned in policy responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrantWithEnrichedRoles {
    #[serde(default)]
    pub roles: Vec<EnrichedRoles>,
}

/// Control as returned in policy responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlResponse {
    #[serde(default)]
    pub grant: GrantWithEnrichedRoles,
}

/// A single condition of a rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleAttribute {
    pub key: String,
    pub operator: String,
    pub value: Value,
}

impl RuleAttribute {
    pub fn new(key: impl Into<String>, operator: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// Condition inside a compound rule: a single attribute or a nested group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NestedCondition {
    Attribute(RuleAttribute),
    WithConditions {
        operator: String,
        conditions: Vec<RuleAttribute>,
    },
}

/// Condition rule of a v2 policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum V2PolicyRule {
    /// One attribute condition
    Attribute(RuleAttribute),
    /// Conditions joined by `and` / `or`
    WithConditions {
        operator: String,
        conditions: Vec<NestedCondition>,
    },
}

/// A v2 access or authorization policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct V2Policy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<V2PolicySubject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<V2PolicyResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<V2PolicyRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<ControlResponse>,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_permit_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_permit_frequency: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateMetadata>,
}

/// One page of v2 policies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct V2PolicyCollection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<First>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Next>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Previous>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub policies: Vec<V2Policy>,
}

impl_page!(V2PolicyCollection, policies, V2Policy);
