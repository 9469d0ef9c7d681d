//! Action control templates and their versions

use super::IamPolicyManagement;
use crate::error::Result;
use crate::http::{DetailedResponse, RequestBuilder};
use crate::models::{
    ActionControlTemplate, ActionControlTemplateCollection,
    ActionControlTemplateVersionsCollection, TemplateActionControl,
};
use crate::operation::{required, required_str, Operation};
use crate::pagination::{ActionControlTemplateVersionsPager, ActionControlTemplatesPager, Pager};
use crate::types::HeaderList;
use serde::Serialize;

const TEMPLATES_PATH: &str = "/v1/action_control_templates";
const TEMPLATE_PATH: &str = "/v1/action_control_templates/{action_control_template_id}";
const VERSIONS_PATH: &str = "/v1/action_control_templates/{action_control_template_id}/versions";
const VERSION_PATH: &str =
    "/v1/action_control_templates/{action_control_template_id}/versions/{version}";
const COMMIT_PATH: &str =
    "/v1/action_control_templates/{action_control_template_id}/versions/{version}/commit";

/// Options of [`IamPolicyManagement::list_action_control_templates`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListActionControlTemplatesOptions {
    /// Required
    pub account_id: Option<String>,
    pub accept_language: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
    pub headers: HeaderList,
}

impl ListActionControlTemplatesOptions {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(ListActionControlTemplatesOptions {
    with_account_id => account_id: String,
    with_accept_language => accept_language: String,
    with_limit => limit: i64,
    with_start => start: String,
});

impl Operation for ListActionControlTemplatesOptions {
    type Output = ActionControlTemplateCollection;
    const OPERATION_ID: &'static str = "ListActionControlTemplates";

    fn build_request(&self) -> Result<RequestBuilder> {
        let account_id = required(&self.account_id, "account_id")?;

        Ok(RequestBuilder::get(TEMPLATES_PATH)
            .headers(&self.headers)
            .optional_header("Accept-Language", self.accept_language.as_ref())
            .query("account_id", account_id)
            .optional_query("limit", self.limit.as_ref())
            .optional_query("start", self.start.as_ref()))
    }
}

impl_list_operation!(ListActionControlTemplatesOptions);

#[derive(Serialize)]
struct CreateActionControlTemplateBody<'a> {
    name: &'a str,
    account_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    committed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_control: Option<&'a TemplateActionControl>,
}

/// Options of [`IamPolicyManagement::create_action_control_template`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateActionControlTemplateOptions {
    /// Required
    pub name: Option<String>,
    /// Required
    pub account_id: Option<String>,
    pub description: Option<String>,
    pub committed: Option<bool>,
    pub action_control: Option<TemplateActionControl>,
    pub accept_language: Option<String>,
    pub headers: HeaderList,
}

impl CreateActionControlTemplateOptions {
    pub fn new(name: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            account_id: Some(account_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(CreateActionControlTemplateOptions {
    with_name => name: String,
    with_account_id => account_id: String,
    with_description => description: String,
    with_committed => committed: bool,
    with_action_control => action_control: TemplateActionControl,
    with_accept_language => accept_language: String,
});

impl Operation for CreateActionControlTemplateOptions {
    type Output = ActionControlTemplate;
    const OPERATION_ID: &'static str = "CreateActionControlTemplate";

    fn build_request(&self) -> Result<RequestBuilder> {
        let body = CreateActionControlTemplateBody {
            name: required(&self.name, "name")?,
            account_id: required(&self.account_id, "account_id")?,
            description: self.description.as_deref(),
            committed: self.committed,
            action_control: self.action_control.as_ref(),
        };

        RequestBuilder::post(TEMPLATES_PATH)
            .headers(&self.headers)
            .optional_header("Accept-Language", self.accept_language.as_ref())
            .json_body(&body)
    }
}

/// Options of [`IamPolicyManagement::get_action_control_template`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetActionControlTemplateOptions {
    /// Required
    pub action_control_template_id: Option<String>,
    pub state: Option<String>,
    pub headers: HeaderList,
}

impl GetActionControlTemplateOptions {
    pub fn new(action_control_template_id: impl Into<String>) -> Self {
        Self {
            action_control_template_id: Some(action_control_template_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(GetActionControlTemplateOptions {
    with_action_control_template_id => action_control_template_id: String,
    with_state => state: String,
});

impl Operation for GetActionControlTemplateOptions {
    type Output = ActionControlTemplate;
    const OPERATION_ID: &'static str = "GetActionControlTemplate";

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.action_control_template_id, "action_control_template_id")?;
        Ok(RequestBuilder::get(TEMPLATE_PATH)
            .path_param("action_control_template_id", id)
            .headers(&self.headers)
            .optional_query("state", self.state.as_ref()))
    }
}

/// Options of [`IamPolicyManagement::delete_action_control_template`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteActionControlTemplateOptions {
    /// Required
    pub action_control_template_id: Option<String>,
    pub headers: HeaderList,
}

impl DeleteActionControlTemplateOptions {
    pub fn new(action_control_template_id: impl Into<String>) -> Self {
        Self {
            action_control_template_id: Some(action_control_template_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(DeleteActionControlTemplateOptions {
    with_action_control_template_id => action_control_template_id: String,
});

impl Operation for DeleteActionControlTemplateOptions {
    type Output = ();
    const OPERATION_ID: &'static str = "DeleteActionControlTemplate";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.action_control_template_id, "action_control_template_id")?;
        Ok(RequestBuilder::delete(TEMPLATE_PATH)
            .path_param("action_control_template_id", id)
            .headers(&self.headers))
    }
}

#[derive(Serialize)]
struct ActionControlVersionBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_control: Option<&'a TemplateActionControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    committed: Option<bool>,
}

/// Options of [`IamPolicyManagement::create_action_control_template_version`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateActionControlTemplateVersionOptions {
    /// Required
    pub action_control_template_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub action_control: Option<TemplateActionControl>,
    pub committed: Option<bool>,
    pub headers: HeaderList,
}

impl CreateActionControlTemplateVersionOptions {
    pub fn new(action_control_template_id: impl Into<String>) -> Self {
        Self {
            action_control_template_id: Some(action_control_template_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(CreateActionControlTemplateVersionOptions {
    with_action_control_template_id => action_control_template_id: String,
    with_name => name: String,
    with_description => description: String,
    with_action_control => action_control: TemplateActionControl,
    with_committed => committed: bool,
});

impl Operation for CreateActionControlTemplateVersionOptions {
    type Output = ActionControlTemplate;
    const OPERATION_ID: &'static str = "CreateActionControlTemplateVersion";

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.action_control_template_id, "action_control_template_id")?;

        RequestBuilder::post(VERSIONS_PATH)
            .path_param("action_control_template_id", id)
            .headers(&self.headers)
            .json_body(&ActionControlVersionBody {
                name: self.name.as_deref(),
                description: self.description.as_deref(),
                action_control: self.action_control.as_ref(),
                committed: self.committed,
            })
    }
}

/// Options of [`IamPolicyManagement::list_action_control_template_versions`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListActionControlTemplateVersionsOptions {
    /// Required
    pub action_control_template_id: Option<String>,
    pub state: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
    pub headers: HeaderList,
}

impl ListActionControlTemplateVersionsOptions {
    pub fn new(action_control_template_id: impl Into<String>) -> Self {
        Self {
            action_control_template_id: Some(action_control_template_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(ListActionControlTemplateVersionsOptions {
    with_action_control_template_id => action_control_template_id: String,
    with_state => state: String,
    with_limit => limit: i64,
    with_start => start: String,
});

impl Operation for ListActionControlTemplateVersionsOptions {
    type Output = ActionControlTemplateVersionsCollection;
    const OPERATION_ID: &'static str = "ListActionControlTemplateVersions";

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.action_control_template_id, "action_control_template_id")?;
        Ok(RequestBuilder::get(VERSIONS_PATH)
            .path_param("action_control_template_id", id)
            .headers(&self.headers)
            .optional_query("state", self.state.as_ref())
            .optional_query("limit", self.limit.as_ref())
            .optional_query("start", self.start.as_ref()))
    }
}

impl_list_operation!(ListActionControlTemplateVersionsOptions);

/// Options of [`IamPolicyManagement::replace_action_control_template`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaceActionControlTemplateOptions {
    /// Required
    pub action_control_template_id: Option<String>,
    /// Required
    pub version: Option<String>,
    /// Required
    pub if_match: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub action_control: Option<TemplateActionControl>,
    pub committed: Option<bool>,
    pub headers: HeaderList,
}

impl ReplaceActionControlTemplateOptions {
    pub fn new(
        action_control_template_id: impl Into<String>,
        version: impl Into<String>,
        if_match: impl Into<String>,
    ) -> Self {
        Self {
            action_control_template_id: Some(action_control_template_id.into()),
            version: Some(version.into()),
            if_match: Some(if_match.into()),
            ..Self::default()
        }
    }
}

options_setters!(ReplaceActionControlTemplateOptions {
    with_action_control_template_id => action_control_template_id: String,
    with_version => version: String,
    with_if_match => if_match: String,
    with_name => name: String,
    with_description => description: String,
    with_action_control => action_control: TemplateActionControl,
    with_committed => committed: bool,
});

impl Operation for ReplaceActionControlTemplateOptions {
    type Output = ActionControlTemplate;
    const OPERATION_ID: &'static str = "ReplaceActionControlTemplate";

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.action_control_template_id, "action_control_template_id")?;
        let version = required_str(&self.version, "version")?;
        let if_match = required(&self.if_match, "if_match")?;

        RequestBuilder::put(VERSION_PATH)
            .path_param("action_control_template_id", id)
            .path_param("version", version)
            .headers(&self.headers)
            .header("If-Match", if_match.clone())
            .json_body(&ActionControlVersionBody {
                name: self.name.as_deref(),
                description: self.description.as_deref(),
                action_control: self.action_control.as_ref(),
                committed: self.committed,
            })
    }
}

/// Options of [`IamPolicyManagement::get_action_control_template_version`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetActionControlTemplateVersionOptions {
    /// Required
    pub action_control_template_id: Option<String>,
    /// Required
    pub version: Option<String>,
    pub headers: HeaderList,
}

impl GetActionControlTemplateVersionOptions {
    pub fn new(action_control_template_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            action_control_template_id: Some(action_control_template_id.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }
}

options_setters!(GetActionControlTemplateVersionOptions {
    with_action_control_template_id => action_control_template_id: String,
    with_version => version: String,
});

impl Operation for GetActionControlTemplateVersionOptions {
    type Output = ActionControlTemplate;
    const OPERATION_ID: &'static str = "GetActionControlTemplateVersion";

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.action_control_template_id, "action_control_template_id")?;
        let version = required_str(&self.version, "version")?;
        Ok(RequestBuilder::get(VERSION_PATH)
            .path_param("action_control_template_id", id)
            .path_param("version", version)
            .headers(&self.headers))
    }
}

/// Options of [`IamPolicyManagement::delete_action_control_template_version`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteActionControlTemplateVersionOptions {
    /// Required
    pub action_control_template_id: Option<String>,
    /// Required
    pub version: Option<String>,
    pub headers: HeaderList,
}

impl DeleteActionControlTemplateVersionOptions {
    pub fn new(action_control_template_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            action_control_template_id: Some(action_control_template_id.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }
}

options_setters!(DeleteActionControlTemplateVersionOptions {
    with_action_control_template_id => action_control_template_id: String,
    with_version => version: String,
});

impl Operation for DeleteActionControlTemplateVersionOptions {
    type Output = ();
    const OPERATION_ID: &'static str = "DeleteActionControlTemplateVersion";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.action_control_template_id, "action_control_template_id")?;
        let version = required_str(&self.version, "version")?;
        Ok(RequestBuilder::delete(VERSION_PATH)
            .path_param("action_control_template_id", id)
            .path_param("version", version)
            .headers(&self.headers))
    }
}

/// Options of [`IamPolicyManagement::commit_action_control_template`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitActionControlTemplateOptions {
    /// Required
    pub action_control_template_id: Option<String>,
    /// Required
    pub version: Option<String>,
    pub if_match: Option<String>,
    pub headers: HeaderList,
}

impl CommitActionControlTemplateOptions {
    pub fn new(action_control_template_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            action_control_template_id: Some(action_control_template_id.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }
}

options_setters!(CommitActionControlTemplateOptions {
    with_action_control_template_id => action_control_template_id: String,
    with_version => version: String,
    with_if_match => if_match: String,
});

impl Operation for CommitActionControlTemplateOptions {
    type Output = ();
    const OPERATION_ID: &'static str = "CommitActionControlTemplate";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<RequestBuilder> {
        let id = required_str(&self.action_control_template_id, "action_control_template_id")?;
        let version = required_str(&self.version, "version")?;
        Ok(RequestBuilder::post(COMMIT_PATH)
            .path_param("action_control_template_id", id)
            .path_param("version", version)
            .headers(&self.headers)
            .optional_header("If-Match", self.if_match.as_ref()))
    }
}

impl IamPolicyManagement {
    /// List action control templates of an account, one page per call
    pub async fn list_action_control_templates(
        &self,
        options: &ListActionControlTemplatesOptions,
    ) -> Result<DetailedResponse<ActionControlTemplateCollection>> {
        self.execute(options).await
    }

    /// Pager over every action control template matching `options`
    pub fn new_action_control_templates_pager(
        &self,
        options: &ListActionControlTemplatesOptions,
    ) -> Result<ActionControlTemplatesPager> {
        Pager::new(self, options)
    }

    /// Create an action control template
    pub async fn create_action_control_template(
        &self,
        options: &CreateActionControlTemplateOptions,
    ) -> Result<DetailedResponse<ActionControlTemplate>> {
        self.execute(options).await
    }

    /// Get the latest version of an action control template
    pub async fn get_action_control_template(
        &self,
        options: &GetActionControlTemplateOptions,
    ) -> Result<DetailedResponse<ActionControlTemplate>> {
        self.execute(options).await
    }

    /// Delete an action control template and all of its versions
    pub async fn delete_action_control_template(
        &self,
        options: &DeleteActionControlTemplateOptions,
    ) -> Result<DetailedResponse<()>> {
        self.execute(options).await
    }

    /// Create a new version of an action control template
    pub async fn create_action_control_template_version(
        &self,
        options: &CreateActionControlTemplateVersionOptions,
    ) -> Result<DetailedResponse<ActionControlTemplate>> {
        self.execute(options).await
    }

    /// List the versions of an action control template, one page per call
    pub async fn list_action_control_template_versions(
        &self,
        options: &ListActionControlTemplateVersionsOptions,
    ) -> Result<DetailedResponse<ActionControlTemplateVersionsCollection>> {
        self.execute(options).await
    }

    /// Pager over every version of an action control template
    pub fn new_action_control_template_versions_pager(
        &self,
        options: &ListActionControlTemplateVersionsOptions,
    ) -> Result<ActionControlTemplateVersionsPager> {
        Pager::new(self, options)
    }

    /// Replace an uncommitted action control template version
    pub async fn replace_action_control_template(
        &self,
        options: &ReplaceActionControlTemplateOptions,
    ) -> Result<DetailedResponse<ActionControlTemplate>> {
        self.execute(options).await
    }

    /// Get one version of an action control template
    pub async fn get_action_control_template_version(
        &self,
        options: &GetActionControlTemplateVersionOptions,
    ) -> Result<DetailedResponse<ActionControlTemplate>> {
        self.execute(options).await
    }

    /// Delete one version of an action control template
    pub async fn delete_action_control_template_version(
        &self,
        options: &DeleteActionControlTemplateVersionOptions,
    ) -> Result<DetailedResponse<()>> {
        self.execute(options).await
    }

    /// Commit an action control template version
    pub async fn commit_action_control_template(
        &self,
        options: &CommitActionControlTemplateOptions,
    ) -> Result<DetailedResponse<()>> {
        self.execute(options).await
    }
}
