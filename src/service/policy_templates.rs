//! Policy templates and their versions

use super::IamPolicyManagement;
use crate::error::Result;
use crate::http::{DetailedResponse, RequestBuilder};
use crate::models::{PolicyTemplate, PolicyTemplateCollection, PolicyTemplateVersionsCollection, TemplatePolicy};
use crate::operation::{required, required_str, Operation};
use crate::pagination::{Pager, PolicyTemplateVersionsPager, PolicyTemplatesPager};
use crate::types::HeaderList;
use serde::Serialize;

const TEMPLATES_PATH: &str = "/v1/policy_templates";
const TEMPLATE_PATH: &str = "/v1/policy_templates/{policy_template_id}";
const VERSIONS_PATH: &str = "/v1/policy_templates/{policy_template_id}/versions";
const VERSION_PATH: &str = "/v1/policy_templates/{policy_template_id}/versions/{version}";
const COMMIT_PATH: &str = "/v1/policy_templates/{policy_template_id}/versions/{version}/commit";

// ============================================================================
// Templates
// ============================================================================

/// Options of [`IamPolicyManagement::list_policy_templates`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPolicyTemplatesOptions {
    /// Required
    pub account_id: Option<String>,
    pub accept_language: Option<String>,
    pub state: Option<String>,
    pub name: Option<String>,
    pub policy_service_type: Option<String>,
    pub policy_service_name: Option<String>,
    pub policy_service_group_id: Option<String>,
    pub policy_type: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
    pub headers: HeaderList,
}

impl ListPolicyTemplatesOptions {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(ListPolicyTemplatesOptions {
    with_account_id => account_id: String,
    with_accept_language => accept_language: String,
    with_state => state: String,
    with_name => name: String,
    with_policy_service_type => policy_service_type: String,
    with_policy_service_name => policy_service_name: String,
    with_policy_service_group_id => policy_service_group_id: String,
    with_policy_type => policy_type: String,
    with_limit => limit: i64,
    with_start => start: String,
});

impl Operation for ListPolicyTemplatesOptions {
    type Output = PolicyTemplateCollection;
    const OPERATION_ID: &'static str = "ListPolicyTemplates";

    fn build_request(&self) -> Result<RequestBuilder> {
        let account_id = required(&self.account_id, "account_id")?;

        Ok(RequestBuilder::get(TEMPLATES_PATH)
            .headers(&self.headers)
            .optional_header("Accept-Language", self.accept_language.as_ref())
            .query("account_id", account_id)
            .optional_query("state", self.state.as_ref())
            .optional_query("name", self.name.as_ref())
            .optional_query("policy_service_type", self.policy_service_type.as_ref())
            .optional_query("policy_service_name", self.policy_service_name.as_ref())
            .optional_query("policy_service_group_id", self.policy_service_group_id.as_ref())
            .optional_query("policy_type", self.policy_type.as_ref())
            .optional_query("limit", self.limit.as_ref())
            .optional_query("start", self.start.as_ref()))
    }
}

impl_list_operation!(ListPolicyTemplatesOptions);

#[derive(Serialize)]
struct CreatePolicyTemplateBody<'a> {
    name: &'a str,
    account_id: &'a str,
    policy: &'a TemplatePolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    committed: Option<bool>,
}

/// Options of [`IamPolicyManagement::create_policy_template`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatePolicyTemplateOptions {
    /// Required; unique within the account
    pub name: Option<String>,
    /// Required
    pub account_id: Option<String>,
    /// Required
    pub policy: Option<TemplatePolicy>,
    pub description: Option<String>,
    pub committed: Option<bool>,
    pub accept_language: Option<String>,
    pub headers: HeaderList,
}

impl CreatePolicyTemplateOptions {
    pub fn new(name: impl Into<String>, account_id: impl Into<String>, policy: TemplatePolicy) -> Self {
        Self {
            name: Some(name.into()),
            account_id: Some(account_id.into()),
            policy: Some(policy),
            ..Self::default()
        }
    }
}

options_setters!(CreatePolicyTemplateOptions {
    with_name => name: String,
    with_account_id => account_id: String,
    with_policy => policy: TemplatePolicy,
    with_description => description: String,
    with_committed => committed: bool,
    with_accept_language => accept_language: String,
});

impl Operation for CreatePolicyTemplateOptions {
    type Output = PolicyTemplate;
    const OPERATION_ID: &'static str = "CreatePolicyTemplate";

    fn build_request(&self) -> Result<RequestBuilder> {
        let body = CreatePolicyTemplateBody {
            name: required(&self.name, "name")?,
            account_id: required(&self.account_id, "account_id")?,
            policy: required(&self.policy, "policy")?,
            description: self.description.as_deref(),
            committed: self.committed,
        };

        RequestBuilder::post(TEMPLATES_PATH)
            .headers(&self.headers)
            .optional_header("Accept-Language", self.accept_language.as_ref())
            .json_body(&body)
    }
}

/// Options of [`IamPolicyManagement::get_policy_template`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetPolicyTemplateOptions {
    /// Required
    pub policy_template_id: Option<String>,
    pub state: Option<String>,
    pub headers: HeaderList,
}

impl GetPolicyTemplateOptions {
    pub fn new(policy_template_id: impl Into<String>) -> Self {
        Self {
            policy_template_id: Some(policy_template_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(GetPolicyTemplateOptions {
    with_policy_template_id => policy_template_id: String,
    with_state => state: String,
});

impl Operation for GetPolicyTemplateOptions {
    type Output = PolicyTemplate;
    const OPERATION_ID: &'static str = "GetPolicyTemplate";

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.policy_template_id, "policy_template_id")?;
        Ok(RequestBuilder::get(TEMPLATE_PATH)
            .path_param("policy_template_id", id)
            .headers(&self.headers)
            .optional_query("state", self.state.as_ref()))
    }
}

/// Options of [`IamPolicyManagement::delete_policy_template`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeletePolicyTemplateOptions {
    /// Required
    pub policy_template_id: Option<String>,
    pub headers: HeaderList,
}

impl DeletePolicyTemplateOptions {
    pub fn new(policy_template_id: impl Into<String>) -> Self {
        Self {
            policy_template_id: Some(policy_template_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(DeletePolicyTemplateOptions {
    with_policy_template_id => policy_template_id: String,
});

impl Operation for DeletePolicyTemplateOptions {
    type Output = ();
    const OPERATION_ID: &'static str = "DeletePolicyTemplate";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.policy_template_id, "policy_template_id")?;
        Ok(RequestBuilder::delete(TEMPLATE_PATH)
            .path_param("policy_template_id", id)
            .headers(&self.headers))
    }
}

// ============================================================================
// Versions
// ============================================================================

#[derive(Serialize)]
struct PolicyTemplateVersionBody<'a> {
    policy: &'a TemplatePolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    committed: Option<bool>,
}

/// Options of [`IamPolicyManagement::create_policy_template_version`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatePolicyTemplateVersionOptions {
    /// Required
    pub policy_template_id: Option<String>,
    /// Required
    pub policy: Option<TemplatePolicy>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub committed: Option<bool>,
    pub headers: HeaderList,
}

impl CreatePolicyTemplateVersionOptions {
    pub fn new(policy_template_id: impl Into<String>, policy: TemplatePolicy) -> Self {
        Self {
            policy_template_id: Some(policy_template_id.into()),
            policy: Some(policy),
            ..Self::default()
        }
    }
}

options_setters!(CreatePolicyTemplateVersionOptions {
    with_policy_template_id => policy_template_id: String,
    with_policy => policy: TemplatePolicy,
    with_name => name: String,
    with_description => description: String,
    with_committed => committed: bool,
});

impl Operation for CreatePolicyTemplateVersionOptions {
    type Output = PolicyTemplate;
    const OPERATION_ID: &'static str = "CreatePolicyTemplateVersion";

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.policy_template_id, "policy_template_id")?;
        let body = PolicyTemplateVersionBody {
            policy: required(&self.policy, "policy")?,
            name: self.name.as_deref(),
            description: self.description.as_deref(),
            committed: self.committed,
        };

        RequestBuilder::post(VERSIONS_PATH)
            .path_param("policy_template_id", id)
            .headers(&self.headers)
            .json_body(&body)
    }
}

/// Options of [`IamPolicyManagement::list_policy_template_versions`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPolicyTemplateVersionsOptions {
    /// Required
    pub policy_template_id: Option<String>,
    pub state: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
    pub headers: HeaderList,
}

impl ListPolicyTemplateVersionsOptions {
    pub fn new(policy_template_id: impl Into<String>) -> Self {
        Self {
            policy_template_id: Some(policy_template_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(ListPolicyTemplateVersionsOptions {
    with_policy_template_id => policy_template_id: String,
    with_state => state: String,
    with_limit => limit: i64,
    with_start => start: String,
});

impl Operation for ListPolicyTemplateVersionsOptions {
    type Output = PolicyTemplateVersionsCollection;
    const OPERATION_ID: &'static str = "ListPolicyTemplateVersions";

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.policy_template_id, "policy_template_id")?;
        Ok(RequestBuilder::get(VERSIONS_PATH)
            .path_param("policy_template_id", id)
            .headers(&self.headers)
            .optional_query("state", self.state.as_ref())
            .optional_query("limit", self.limit.as_ref())
            .optional_query("start", self.start.as_ref()))
    }
}

impl_list_operation!(ListPolicyTemplateVersionsOptions);

/// Options of [`IamPolicyManagement::replace_policy_template`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplacePolicyTemplateOptions {
    /// Required
    pub policy_template_id: Option<String>,
    /// Required
    pub version: Option<String>,
    /// Required
    pub if_match: Option<String>,
    /// Required
    pub policy: Option<TemplatePolicy>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub committed: Option<bool>,
    pub headers: HeaderList,
}

impl ReplacePolicyTemplateOptions {
    pub fn new(
        policy_template_id: impl Into<String>,
        version: impl Into<String>,
        if_match: impl Into<String>,
        policy: TemplatePolicy,
    ) -> Self {
        Self {
            policy_template_id: Some(policy_template_id.into()),
            version: Some(version.into()),
            if_match: Some(if_match.into()),
            policy: Some(policy),
            ..Self::default()
        }
    }
}

options_setters!(ReplacePolicyTemplateOptions {
    with_policy_template_id => policy_template_id: String,
    with_version => version: String,
    with_if_match => if_match: String,
    with_policy => policy: TemplatePolicy,
    with_name => name: String,
    with_description => description: String,
    with_committed => committed: bool,
});

impl Operation for ReplacePolicyTemplateOptions {
    type Output = PolicyTemplate;
    const OPERATION_ID: &'static str = "ReplacePolicyTemplate";

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.policy_template_id, "policy_template_id")?;
        let version = required_str(&self.version, "version")?;
        let if_match = required(&self.if_match, "if_match")?;
        let body = PolicyTemplateVersionBody {
            policy: required(&self.policy, "policy")?,
            name: self.name.as_deref(),
            description: self.description.as_deref(),
            committed: self.committed,
        };

        RequestBuilder::put(VERSION_PATH)
            .path_param("policy_template_id", id)
            .path_param("version", version)
            .headers(&self.headers)
            .header("If-Match", if_match.clone())
            .json_body(&body)
    }
}

/// Options of [`IamPolicyManagement::get_policy_template_version`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetPolicyTemplateVersionOptions {
    /// Required
    pub policy_template_id: Option<String>,
    /// Required
    pub version: Option<String>,
    pub headers: HeaderList,
}

impl GetPolicyTemplateVersionOptions {
    pub fn new(policy_template_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            policy_template_id: Some(policy_template_id.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }
}

options_setters!(GetPolicyTemplateVersionOptions {
    with_policy_template_id => policy_template_id: String,
    with_version => version: String,
});

impl Operation for GetPolicyTemplateVersionOptions {
    type Output = PolicyTemplate;
    const OPERATION_ID: &'static str = "GetPolicyTemplateVersion";

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.policy_template_id, "policy_template_id")?;
        let version = required_str(&self.version, "version")?;
        Ok(RequestBuilder::get(VERSION_PATH)
            .path_param("policy_template_id", id)
            .path_param("version", version)
            .headers(&self.headers))
    }
}

/// Options of [`IamPolicyManagement::delete_policy_template_version`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeletePolicyTemplateVersionOptions {
    /// Required
    pub policy_template_id: Option<String>,
    /// Required
    pub version: Option<String>,
    pub headers: HeaderList,
}

impl DeletePolicyTemplateVersionOptions {
    pub fn new(policy_template_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            policy_template_id: Some(policy_template_id.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }
}

options_setters!(DeletePolicyTemplateVersionOptions {
    with_policy_template_id => policy_template_id: String,
    with_version => version: String,
});

impl Operation for DeletePolicyTemplateVersionOptions {
    type Output = ();
    const OPERATION_ID: &'static str = "DeletePolicyTemplateVersion";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.policy_template_id, "policy_template_id")?;
        let version = required_str(&self.version, "version")?;
        Ok(RequestBuilder::delete(VERSION_PATH)
            .path_param("policy_template_id", id)
            .path_param("version", version)
            .headers(&self.headers))
    }
}

/// Options of [`IamPolicyManagement::commit_policy_template`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitPolicyTemplateOptions {
    /// Required
    pub policy_template_id: Option<String>,
    /// Required
    pub version: Option<String>,
    pub if_match: Option<String>,
    pub headers: HeaderList,
}

impl CommitPolicyTemplateOptions {
    pub fn new(policy_template_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            policy_template_id: Some(policy_template_id.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }
}

options_setters!(CommitPolicyTemplateOptions {
    with_policy_template_id => policy_template_id: String,
    with_version => version: String,
    with_if_match => if_match: String,
});

impl Operation for CommitPolicyTemplateOptions {
    type Output = ();
    const OPERATION_ID: &'static str = "CommitPolicyTemplate";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.policy_template_id, "policy_template_id")?;
        let version = required_str(&self.version, "version")?;
        Ok(RequestBuilder::post(COMMIT_PATH)
            .path_param("policy_template_id", id)
            .path_param("version", version)
            .headers(&self.headers)
            .optional_header("If-Match", self.if_match.as_ref()))
    }
}

// ============================================================================
// Client methods
// ============================================================================

impl IamPolicyManagement {
    /// List policy templates of an account, one page per call
    pub async fn list_policy_templates(
        &self,
        options: &ListPolicyTemplatesOptions,
    ) -> Result<DetailedResponse<PolicyTemplateCollection>> {
        self.execute(options).await
    }

    /// Pager over every policy template matching `options`
    pub fn new_policy_templates_pager(
        &self,
        options: &ListPolicyTemplatesOptions,
    ) -> Result<PolicyTemplatesPager> {
        Pager::new(self, options)
    }

    /// Create a policy template with its first version
    pub async fn create_policy_template(
        &self,
        options: &CreatePolicyTemplateOptions,
    ) -> Result<DetailedResponse<PolicyTemplate>> {
        self.execute(options).await
    }

    /// Get the latest version of a policy template
    pub async fn get_policy_template(
        &self,
        options: &GetPolicyTemplateOptions,
    ) -> Result<DetailedResponse<PolicyTemplate>> {
        self.execute(options).await
    }

    /// Delete a policy template and all of its versions
    pub async fn delete_policy_template(
        &self,
        options: &DeletePolicyTemplateOptions,
    ) -> Result<DetailedResponse<()>> {
        self.execute(options).await
    }

    /// Create a new version of a policy template
    pub async fn create_policy_template_version(
        &self,
        options: &CreatePolicyTemplateVersionOptions,
    ) -> Result<DetailedResponse<PolicyTemplate>> {
        self.execute(options).await
    }

    /// List the versions of a policy template, one page per call
    pub async fn list_policy_template_versions(
        &self,
        options: &ListPolicyTemplateVersionsOptions,
    ) -> Result<DetailedResponse<PolicyTemplateVersionsCollection>> {
        self.execute(options).await
    }

    /// Pager over every version of a policy template
    pub fn new_policy_template_versions_pager(
        &self,
        options: &ListPolicyTemplateVersionsOptions,
    ) -> Result<PolicyTemplateVersionsPager> {
        Pager::new(self, options)
    }

    /// Replace an uncommitted policy template version
    pub async fn replace_policy_template(
        &self,
        options: &ReplacePolicyTemplateOptions,
    ) -> Result<DetailedResponse<PolicyTemplate>> {
        self.execute(options).await
    }

    /// Get one version of a policy template
    pub async fn get_policy_template_version(
        &self,
        options: &GetPolicyTemplateVersionOptions,
    ) -> Result<DetailedResponse<PolicyTemplate>> {
        self.execute(options).await
    }

    /// Delete one version of a policy template
    pub async fn delete_policy_template_version(
        &self,
        options: &DeletePolicyTemplateVersionOptions,
    ) -> Result<DetailedResponse<()>> {
        self.execute(options).await
    }

    /// Commit a policy template version, making it immutable
    pub async fn commit_policy_template(
        &self,
        options: &CommitPolicyTemplateOptions,
    ) -> Result<DetailedResponse<()>> {
        self.execute(options).await
    }
}
