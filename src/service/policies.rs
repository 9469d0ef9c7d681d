//! Access policies (v1)

use super::IamPolicyManagement;
use crate::error::Result;
use crate::http::{DetailedResponse, RequestBuilder};
use crate::models::{Policy, PolicyCollection, PolicyResource, PolicyRole, PolicySubject};
use crate::operation::{required, required_str, Operation};
use crate::pagination::{Pager, PoliciesPager};
use crate::types::HeaderList;
use serde::Serialize;

// ============================================================================
// ListPolicies
// ============================================================================

/// Options of [`IamPolicyManagement::list_policies`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPoliciesOptions {
    /// Account the policies belong to (required)
    pub account_id: Option<String>,
    pub accept_language: Option<String>,
    pub iam_id: Option<String>,
    pub access_group_id: Option<String>,
    /// `access` or `authorization`
    pub policy_type: Option<String>,
    /// `service` or `platform_service`
    pub service_type: Option<String>,
    pub tag_name: Option<String>,
    pub tag_value: Option<String>,
    /// Sort key, prefix with `-` for descending order
    pub sort: Option<String>,
    /// `include_last_permit` adds last permit details
    pub format: Option<String>,
    /// `active` or `deleted`
    pub state: Option<String>,
    /// Page size
    pub limit: Option<i64>,
    /// Page cursor
    pub start: Option<String>,
    pub headers: HeaderList,
}

impl ListPoliciesOptions {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(ListPoliciesOptions {
    with_account_id => account_id: String,
    with_accept_language => accept_language: String,
    with_iam_id => iam_id: String,
    with_access_group_id => access_group_id: String,
    with_policy_type => policy_type: String,
    with_service_type => service_type: String,
    with_tag_name => tag_name: String,
    with_tag_value => tag_value: String,
    with_sort => sort: String,
    with_format => format: String,
    with_state => state: String,
    with_limit => limit: i64,
    with_start => start: String,
});

impl Operation for ListPoliciesOptions {
    type Output = PolicyCollection;
    const OPERATION_ID: &'static str = "ListPolicies";

    fn build_request(&self) -> Result<RequestBuilder> {
        let account_id = required(&self.account_id, "account_id")?;

        Ok(RequestBuilder::get("/v1/policies")
            .headers(&self.headers)
            .optional_header("Accept-Language", self.accept_language.as_ref())
            .query("account_id", account_id)
            .optional_query("iam_id", self.iam_id.as_ref())
            .optional_query("access_group_id", self.access_group_id.as_ref())
            .optional_query("type", self.policy_type.as_ref())
            .optional_query("service_type", self.service_type.as_ref())
            .optional_query("tag_name", self.tag_name.as_ref())
            .optional_query("tag_value", self.tag_value.as_ref())
            .optional_query("sort", self.sort.as_ref())
            .optional_query("format", self.format.as_ref())
            .optional_query("state", self.state.as_ref())
            .optional_query("limit", self.limit.as_ref())
            .optional_query("start", self.start.as_ref()))
    }
}

impl_list_operation!(ListPoliciesOptions);

// ============================================================================
// CreatePolicy / ReplacePolicy
// ============================================================================

#[derive(Serialize)]
struct PolicyBody<'a> {
    #[serde(rename = "type")]
    policy_type: &'a str,
    subjects: &'a [PolicySubject],
    roles: &'a [PolicyRole],
    resources: &'a [PolicyResource],
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// Options of [`IamPolicyManagement::create_policy`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatePolicyOptions {
    /// `access` or `authorization` (required)
    pub policy_type: Option<String>,
    /// Required
    pub subjects: Option<Vec<PolicySubject>>,
    /// Required
    pub roles: Option<Vec<PolicyRole>>,
    /// Required
    pub resources: Option<Vec<PolicyResource>>,
    pub description: Option<String>,
    pub accept_language: Option<String>,
    pub headers: HeaderList,
}

impl CreatePolicyOptions {
    pub fn new(
        policy_type: impl Into<String>,
        subjects: Vec<PolicySubject>,
        roles: Vec<PolicyRole>,
        resources: Vec<PolicyResource>,
    ) -> Self {
        Self {
            policy_type: Some(policy_type.into()),
            subjects: Some(subjects),
            roles: Some(roles),
            resources: Some(resources),
            ..Self::default()
        }
    }
}

options_setters!(CreatePolicyOptions {
    with_policy_type => policy_type: String,
    with_subjects => subjects: Vec<PolicySubject>,
    with_roles => roles: Vec<PolicyRole>,
    with_resources => resources: Vec<PolicyResource>,
    with_description => description: String,
    with_accept_language => accept_language: String,
});

impl Operation for CreatePolicyOptions {
    type Output = Policy;
    const OPERATION_ID: &'static str = "CreatePolicy";

    fn build_request(&self) -> Result<RequestBuilder> {
        let body = PolicyBody {
            policy_type: required(&self.policy_type, "type")?,
            subjects: required(&self.subjects, "subjects")?,
            roles: required(&self.roles, "roles")?,
            resources: required(&self.resources, "resources")?,
            description: self.description.as_deref(),
        };

        RequestBuilder::post("/v1/policies")
            .headers(&self.headers)
            .optional_header("Accept-Language", self.accept_language.as_ref())
            .json_body(&body)
    }
}

/// Options of [`IamPolicyManagement::replace_policy`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplacePolicyOptions {
    /// Required
    pub policy_id: Option<String>,
    /// ETag of the policy being replaced (required)
    pub if_match: Option<String>,
    /// Required
    pub policy_type: Option<String>,
    /// Required
    pub subjects: Option<Vec<PolicySubject>>,
    /// Required
    pub roles: Option<Vec<PolicyRole>>,
    /// Required
    pub resources: Option<Vec<PolicyResource>>,
    pub description: Option<String>,
    pub headers: HeaderList,
}

impl ReplacePolicyOptions {
    pub fn new(
        policy_id: impl Into<String>,
        if_match: impl Into<String>,
        policy_type: impl Into<String>,
        subjects: Vec<PolicySubject>,
        roles: Vec<PolicyRole>,
        resources: Vec<PolicyResource>,
    ) -> Self {
        Self {
            policy_id: Some(policy_id.into()),
            if_match: Some(if_match.into()),
            policy_type: Some(policy_type.into()),
            subjects: Some(subjects),
            roles: Some(roles),
            resources: Some(resources),
            ..Self::default()
        }
    }
}

options_setters!(ReplacePolicyOptions {
    with_policy_id => policy_id: String,
    with_if_match => if_match: String,
    with_policy_type => policy_type: String,
    with_subjects => subjects: Vec<PolicySubject>,
    with_roles => roles: Vec<PolicyRole>,
    with_resources => resources: Vec<PolicyResource>,
    with_description => description: String,
});

impl Operation for ReplacePolicyOptions {
    type Output = Policy;
    const OPERATION_ID: &'static str = "ReplacePolicy";

    fn build_request(&self) -> Result<RequestBuilder> {
        let policy_id = required_str(&self.policy_id, "policy_id")?;
        let if_match = required(&self.if_match, "if_match")?;
        let body = PolicyBody {
            policy_type: required(&self.policy_type, "type")?,
            subjects: required(&self.subjects, "subjects")?,
            roles: required(&self.roles, "roles")?,
            resources: required(&self.resources, "resources")?,
            description: self.description.as_deref(),
        };

        RequestBuilder::put("/v1/policies/{policy_id}")
            .path_param("policy_id", policy_id)
            .headers(&self.headers)
            .header("If-Match", if_match.clone())
            .json_body(&body)
    }
}

// ============================================================================
// GetPolicy / DeletePolicy
// ============================================================================

/// Options of [`IamPolicyManagement::get_policy`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetPolicyOptions {
    /// Required
    pub policy_id: Option<String>,
    pub headers: HeaderList,
}

impl GetPolicyOptions {
    pub fn new(policy_id: impl Into<String>) -> Self {
        Self {
            policy_id: Some(policy_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(GetPolicyOptions {
    with_policy_id => policy_id: String,
});

impl Operation for GetPolicyOptions {
    type Output = Policy;
    const OPERATION_ID: &'static str = "GetPolicy";

    fn build_request(&self) -> Result<RequestBuilder> {
        let policy_id = required_str(&self.policy_id, "policy_id")?;
        Ok(RequestBuilder::get("/v1/policies/{policy_id}")
            .path_param("policy_id", policy_id)
            .headers(&self.headers))
    }
}

/// Options of [`IamPolicyManagement::delete_policy`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeletePolicyOptions {
    /// Required
    pub policy_id: Option<String>,
    pub headers: HeaderList,
}

impl DeletePolicyOptions {
    pub fn new(policy_id: impl Into<String>) -> Self {
        Self {
            policy_id: Some(policy_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(DeletePolicyOptions {
    with_policy_id => policy_id: String,
});

impl Operation for DeletePolicyOptions {
    type Output = ();
    const OPERATION_ID: &'static str = "DeletePolicy";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<RequestBuilder> {
        let policy_id = required_str(&self.policy_id, "policy_id")?;
        Ok(RequestBuilder::delete("/v1/policies/{policy_id}")
            .path_param("policy_id", policy_id)
            .headers(&self.headers))
    }
}

// ============================================================================
// UpdatePolicyState
// ============================================================================

#[derive(Serialize)]
struct PolicyStateBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'a str>,
}

/// Options of [`IamPolicyManagement::update_policy_state`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePolicyStateOptions {
    /// Required
    pub policy_id: Option<String>,
    /// Required
    pub if_match: Option<String>,
    /// `active` or `deleted`
    pub state: Option<String>,
    pub headers: HeaderList,
}

impl UpdatePolicyStateOptions {
    pub fn new(policy_id: impl Into<String>, if_match: impl Into<String>) -> Self {
        Self {
            policy_id: Some(policy_id.into()),
            if_match: Some(if_match.into()),
            ..Self::default()
        }
    }
}

options_setters!(UpdatePolicyStateOptions {
    with_policy_id => policy_id: String,
    with_if_match => if_match: String,
    with_state => state: String,
});

impl Operation for UpdatePolicyStateOptions {
    type Output = Policy;
    const OPERATION_ID: &'static str = "UpdatePolicyState";

    fn build_request(&self) -> Result<RequestBuilder> {
        let policy_id = required_str(&self.policy_id, "policy_id")?;
        let if_match = required(&self.if_match, "if_match")?;

        RequestBuilder::patch("/v1/policies/{policy_id}")
            .path_param("policy_id", policy_id)
            .headers(&self.headers)
            .header("If-Match", if_match.clone())
            .json_body(&PolicyStateBody {
                state: self.state.as_deref(),
            })
    }
}

// ============================================================================
// Client methods
// ============================================================================

impl IamPolicyManagement {
    /// List v1 policies of an account, one page per call
    pub async fn list_policies(
        &self,
        options: &ListPoliciesOptions,
    ) -> Result<DetailedResponse<PolicyCollection>> {
        self.execute(options).await
    }

    /// Pager over every v1 policy matching `options`
    pub fn new_policies_pager(&self, options: &ListPoliciesOptions) -> Result<PoliciesPager> {
        Pager::new(self, options)
    }

    /// Create a v1 policy
    pub async fn create_policy(
        &self,
        options: &CreatePolicyOptions,
    ) -> Result<DetailedResponse<Policy>> {
        self.execute(options).await
    }

    /// Replace a v1 policy
    pub async fn replace_policy(
        &self,
        options: &ReplacePolicyOptions,
    ) -> Result<DetailedResponse<Policy>> {
        self.execute(options).await
    }

    /// Get a v1 policy by ID
    pub async fn get_policy(&self, options: &GetPolicyOptions) -> Result<DetailedResponse<Policy>> {
        self.execute(options).await
    }

    /// Delete a v1 policy by ID
    pub async fn delete_policy(&self, options: &DeletePolicyOptions) -> Result<DetailedResponse<()>> {
        self.execute(options).await
    }

    /// Restore or soft-delete a v1 policy
    pub async fn update_policy_state(
        &self,
        options: &UpdatePolicyStateOptions,
    ) -> Result<DetailedResponse<Policy>> {
        self.execute(options).await
    }
}
