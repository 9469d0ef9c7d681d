//! Access policies (v2)

use super::IamPolicyManagement;
use crate::error::Result;
use crate::http::{DetailedResponse, RequestBuilder};
use crate::models::{Control, V2Policy, V2PolicyCollection, V2PolicyResource, V2PolicyRule, V2PolicySubject};
use crate::operation::{required, required_str, Operation};
use crate::pagination::{Pager, V2PoliciesPager};
use crate::types::HeaderList;
use serde::Serialize;

/// Options of [`IamPolicyManagement::list_v2_policies`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListV2PoliciesOptions {
    /// Required
    pub account_id: Option<String>,
    pub accept_language: Option<String>,
    pub iam_id: Option<String>,
    pub access_group_id: Option<String>,
    pub policy_type: Option<String>,
    pub service_type: Option<String>,
    pub service_name: Option<String>,
    pub service_group_id: Option<String>,
    pub sort: Option<String>,
    /// `include_last_permit` or `display`
    pub format: Option<String>,
    pub state: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
    pub headers: HeaderList,
}

impl ListV2PoliciesOptions {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(ListV2PoliciesOptions {
    with_account_id => account_id: String,
    with_accept_language => accept_language: String,
    with_iam_id => iam_id: String,
    with_access_group_id => access_group_id: String,
    with_policy_type => policy_type: String,
    with_service_type => service_type: String,
    with_service_name => service_name: String,
    with_service_group_id => service_group_id: String,
    with_sort => sort: String,
    with_format => format: String,
    with_state => state: String,
    with_limit => limit: i64,
    with_start => start: String,
});

impl Operation for ListV2PoliciesOptions {
    type Output = V2PolicyCollection;
    const OPERATION_ID: &'static str = "ListV2Policies";

    fn build_request(&self) -> Result<RequestBuilder> {
        let account_id = required(&self.account_id, "account_id")?;

        Ok(RequestBuilder::get("/v2/policies")
            .headers(&self.headers)
            .optional_header("Accept-Language", self.accept_language.as_ref())
            .query("account_id", account_id)
            .optional_query("iam_id", self.iam_id.as_ref())
            .optional_query("access_group_id", self.access_group_id.as_ref())
            .optional_query("type", self.policy_type.as_ref())
            .optional_query("service_type", self.service_type.as_ref())
            .optional_query("service_name", self.service_name.as_ref())
            .optional_query("service_group_id", self.service_group_id.as_ref())
            .optional_query("sort", self.sort.as_ref())
            .optional_query("format", self.format.as_ref())
            .optional_query("state", self.state.as_ref())
            .optional_query("limit", self.limit.as_ref())
            .optional_query("start", self.start.as_ref()))
    }
}

impl_list_operation!(ListV2PoliciesOptions);

#[derive(Serialize)]
struct V2PolicyBody<'a> {
    control: &'a Control,
    #[serde(rename = "type")]
    policy_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<&'a V2PolicySubject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<&'a V2PolicyResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<&'a V2PolicyRule>,
}

/// Options of [`IamPolicyManagement::create_v2_policy`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateV2PolicyOptions {
    /// Required
    pub control: Option<Control>,
    /// Required
    pub policy_type: Option<String>,
    pub description: Option<String>,
    pub subject: Option<V2PolicySubject>,
    pub resource: Option<V2PolicyResource>,
    /// Pattern the rule follows, e.g. `time-based-conditions:weekly:custom-hours`
    pub pattern: Option<String>,
    pub rule: Option<V2PolicyRule>,
    pub accept_language: Option<String>,
    pub headers: HeaderList,
}

impl CreateV2PolicyOptions {
    pub fn new(control: Control, policy_type: impl Into<String>) -> Self {
        Self {
            control: Some(control),
            policy_type: Some(policy_type.into()),
            ..Self::default()
        }
    }
}

options_setters!(CreateV2PolicyOptions {
    with_control => control: Control,
    with_policy_type => policy_type: String,
    with_description => description: String,
    with_subject => subject: V2PolicySubject,
    with_resource => resource: V2PolicyResource,
    with_pattern => pattern: String,
    with_rule => rule: V2PolicyRule,
    with_accept_language => accept_language: String,
});

impl Operation for CreateV2PolicyOptions {
    type Output = V2Policy;
    const OPERATION_ID: &'static str = "CreateV2Policy";

    fn build_request(&self) -> Result<RequestBuilder> {
        let body = V2PolicyBody {
            control: required(&self.control, "control")?,
            policy_type: required(&self.policy_type, "type")?,
            description: self.description.as_deref(),
            subject: self.subject.as_ref(),
            resource: self.resource.as_ref(),
            pattern: self.pattern.as_deref(),
            rule: self.rule.as_ref(),
        };

        RequestBuilder::post("/v2/policies")
            .headers(&self.headers)
            .optional_header("Accept-Language", self.accept_language.as_ref())
            .json_body(&body)
    }
}

/// Options of [`IamPolicyManagement::replace_v2_policy`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaceV2PolicyOptions {
    /// Policy ID (required)
    pub id: Option<String>,
    /// Required
    pub if_match: Option<String>,
    /// Required
    pub control: Option<Control>,
    /// Required
    pub policy_type: Option<String>,
    pub description: Option<String>,
    pub subject: Option<V2PolicySubject>,
    pub resource: Option<V2PolicyResource>,
    pub pattern: Option<String>,
    pub rule: Option<V2PolicyRule>,
    pub headers: HeaderList,
}

impl ReplaceV2PolicyOptions {
    pub fn new(
        id: impl Into<String>,
        if_match: impl Into<String>,
        control: Control,
        policy_type: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            if_match: Some(if_match.into()),
            control: Some(control),
            policy_type: Some(policy_type.into()),
            ..Self::default()
        }
    }
}

options_setters!(ReplaceV2PolicyOptions {
    with_id => id: String,
    with_if_match => if_match: String,
    with_control => control: Control,
    with_policy_type => policy_type: String,
    with_description => description: String,
    with_subject => subject: V2PolicySubject,
    with_resource => resource: V2PolicyResource,
    with_pattern => pattern: String,
    with_rule => rule: V2PolicyRule,
});

impl Operation for ReplaceV2PolicyOptions {
    type Output = V2Policy;
    const OPERATION_ID: &'static str = "ReplaceV2Policy";

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.id, "id")?;
        let if_match = required(&self.if_match, "if_match")?;
        let body = V2PolicyBody {
            control: required(&self.control, "control")?,
            policy_type: required(&self.policy_type, "type")?,
            description: self.description.as_deref(),
            subject: self.subject.as_ref(),
            resource: self.resource.as_ref(),
            pattern: self.pattern.as_deref(),
            rule: self.rule.as_ref(),
        };

        RequestBuilder::put("/v2/policies/{id}")
            .path_param("id", id)
            .headers(&self.headers)
            .header("If-Match", if_match.clone())
            .json_body(&body)
    }
}

/// Options of [`IamPolicyManagement::get_v2_policy`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetV2PolicyOptions {
    /// Required
    pub id: Option<String>,
    pub format: Option<String>,
    pub headers: HeaderList,
}

impl GetV2PolicyOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

options_setters!(GetV2PolicyOptions {
    with_id => id: String,
    with_format => format: String,
});

impl Operation for GetV2PolicyOptions {
    type Output = V2Policy;
    const OPERATION_ID: &'static str = "GetV2Policy";

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.id, "id")?;
        Ok(RequestBuilder::get("/v2/policies/{id}")
            .path_param("id", id)
            .headers(&self.headers)
            .optional_query("format", self.format.as_ref()))
    }
}

/// Options of [`IamPolicyManagement::delete_v2_policy`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteV2PolicyOptions {
    /// Required
    pub id: Option<String>,
    pub headers: HeaderList,
}

impl DeleteV2PolicyOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

options_setters!(DeleteV2PolicyOptions {
    with_id => id: String,
});

impl Operation for DeleteV2PolicyOptions {
    type Output = ();
    const OPERATION_ID: &'static str = "DeleteV2Policy";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.id, "id")?;
        Ok(RequestBuilder::delete("/v2/policies/{id}")
            .path_param("id", id)
            .headers(&self.headers))
    }
}

impl IamPolicyManagement {
    /// List v2 policies of an account, one page per call
    pub async fn list_v2_policies(
        &self,
        options: &ListV2PoliciesOptions,
    ) -> Result<DetailedResponse<V2PolicyCollection>> {
        self.execute(options).await
    }

    /// Pager over every v2 policy matching `options`
    pub fn new_v2_policies_pager(&self, options: &ListV2PoliciesOptions) -> Result<V2PoliciesPager> {
        Pager::new(self, options)
    }

    /// Create a v2 policy
    pub async fn create_v2_policy(
        &self,
        options: &CreateV2PolicyOptions,
    ) -> Result<DetailedResponse<V2Policy>> {
        self.execute(options).await
    }

    /// Replace a v2 policy
    pub async fn replace_v2_policy(
        &self,
        options: &ReplaceV2PolicyOptions,
    ) -> Result<DetailedResponse<V2Policy>> {
        self.execute(options).await
    }

    /// Get a v2 policy by ID
    pub async fn get_v2_policy(
        &self,
        options: &GetV2PolicyOptions,
    ) -> Result<DetailedResponse<V2Policy>> {
        self.execute(options).await
    }

    /// Delete a v2 policy by ID
    pub async fn delete_v2_policy(
        &self,
        options: &DeleteV2PolicyOptions,
    ) -> Result<DetailedResponse<()>> {
        self.execute(options).await
    }
}
