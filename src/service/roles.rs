//! Custom, service and system roles

use super::IamPolicyManagement;
use crate::error::Result;
use crate::http::{DetailedResponse, RequestBuilder};
use crate::models::{CustomRole, RoleCollection};
use crate::operation::{required, required_str, Operation};
use crate::types::HeaderList;
use serde::Serialize;

/// Options of [`IamPolicyManagement::list_roles`].
///
/// Roles are returned in a single response, there is no pager.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListRolesOptions {
    pub accept_language: Option<String>,
    pub account_id: Option<String>,
    pub service_name: Option<String>,
    pub source_service_name: Option<String>,
    pub policy_type: Option<String>,
    pub service_group_id: Option<String>,
    pub headers: HeaderList,
}

impl ListRolesOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

options_setters!(ListRolesOptions {
    with_accept_language => accept_language: String,
    with_account_id => account_id: String,
    with_service_name => service_name: String,
    with_source_service_name => source_service_name: String,
    with_policy_type => policy_type: String,
    with_service_group_id => service_group_id: String,
});

impl Operation for ListRolesOptions {
    type Output = RoleCollection;
    const OPERATION_ID: &'static str = "ListRoles";

    fn build_request(&self) -> Result<RequestBuilder> {
        Ok(RequestBuilder::get("/v2/roles")
            .headers(&self.headers)
            .optional_header("Accept-Language", self.accept_language.as_ref())
            .optional_query("account_id", self.account_id.as_ref())
            .optional_query("service_name", self.service_name.as_ref())
            .optional_query("source_service_name", self.source_service_name.as_ref())
            .optional_query("policy_type", self.policy_type.as_ref())
            .optional_query("service_group_id", self.service_group_id.as_ref()))
    }
}

#[derive(Serialize)]
struct CreateRoleBody<'a> {
    display_name: &'a str,
    actions: &'a [String],
    name: &'a str,
    account_id: &'a str,
    service_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// Options of [`IamPolicyManagement::create_role`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateRoleOptions {
    /// Required
    pub display_name: Option<String>,
    /// Required
    pub actions: Option<Vec<String>>,
    /// Required; must start with an upper-case letter
    pub name: Option<String>,
    /// Required
    pub account_id: Option<String>,
    /// Required
    pub service_name: Option<String>,
    pub description: Option<String>,
    pub accept_language: Option<String>,
    pub headers: HeaderList,
}

impl CreateRoleOptions {
    pub fn new(
        display_name: impl Into<String>,
        actions: Vec<String>,
        name: impl Into<String>,
        account_id: impl Into<String>,
        service_name: impl Into<String>,
    ) -> Self {
        Self {
            display_name: Some(display_name.into()),
            actions: Some(actions),
            name: Some(name.into()),
            account_id: Some(account_id.into()),
            service_name: Some(service_name.into()),
            ..Self::default()
        }
    }
}

options_setters!(CreateRoleOptions {
    with_display_name => display_name: String,
    with_actions => actions: Vec<String>,
    with_name => name: String,
    with_account_id => account_id: String,
    with_service_name => service_name: String,
    with_description => description: String,
    with_accept_language => accept_language: String,
});

impl Operation for CreateRoleOptions {
    type Output = CustomRole;
    const OPERATION_ID: &'static str = "CreateRole";

    fn build_request(&self) -> Result<RequestBuilder> {
        let body = CreateRoleBody {
            display_name: required(&self.display_name, "display_name")?,
            actions: required(&self.actions, "actions")?,
            name: required(&self.name, "name")?,
            account_id: required(&self.account_id, "account_id")?,
            service_name: required(&self.service_name, "service_name")?,
            description: self.description.as_deref(),
        };

        RequestBuilder::post("/v2/roles")
            .headers(&self.headers)
            .optional_header("Accept-Language", self.accept_language.as_ref())
            .json_body(&body)
    }
}

/// Options of [`IamPolicyManagement::get_role`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetRoleOptions {
    /// Required
    pub role_id: Option<String>,
    pub headers: HeaderList,
}

impl GetRoleOptions {
    pub fn new(role_id: impl Into<String>) -> Self {
        Self {
            role_id: Some(role_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(GetRoleOptions {
    with_role_id => role_id: String,
});

impl Operation for GetRoleOptions {
    type Output = CustomRole;
    const OPERATION_ID: &'static str = "GetRole";

    fn build_request(&self) -> Result<RequestBuilder> {
        let role_id = required_str(&self.role_id, "role_id")?;
        Ok(RequestBuilder::get("/v2/roles/{role_id}")
            .path_param("role_id", role_id)
            .headers(&self.headers))
    }
}

#[derive(Serialize)]
struct ReplaceRoleBody<'a> {
    display_name: &'a str,
    actions: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// Options of [`IamPolicyManagement::replace_role`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaceRoleOptions {
    /// Required
    pub role_id: Option<String>,
    /// Required
    pub if_match: Option<String>,
    /// Required
    pub display_name: Option<String>,
    /// Required
    pub actions: Option<Vec<String>>,
    pub description: Option<String>,
    pub headers: HeaderList,
}

impl ReplaceRoleOptions {
    pub fn new(
        role_id: impl Into<String>,
        if_match: impl Into<String>,
        display_name: impl Into<String>,
        actions: Vec<String>,
    ) -> Self {
        Self {
            role_id: Some(role_id.into()),
            if_match: Some(if_match.into()),
            display_name: Some(display_name.into()),
            actions: Some(actions),
            ..Self::default()
        }
    }
}

options_setters!(ReplaceRoleOptions {
    with_role_id => role_id: String,
    with_if_match => if_match: String,
    with_display_name => display_name: String,
    with_actions => actions: Vec<String>,
    with_description => description: String,
});

impl Operation for ReplaceRoleOptions {
    type Output = CustomRole;
    const OPERATION_ID: &'static str = "ReplaceRole";

    fn build_request(&self) -> Result<RequestBuilder> {
        let role_id = required_str(&self.role_id, "role_id")?;
        let if_match = required(&self.if_match, "if_match")?;
        let body = ReplaceRoleBody {
            display_name: required(&self.display_name, "display_name")?,
            actions: required(&self.actions, "actions")?,
            description: self.description.as_deref(),
        };

        RequestBuilder::put("/v2/roles/{role_id}")
            .path_param("role_id", role_id)
            .headers(&self.headers)
            .header("If-Match", if_match.clone())
            .json_body(&body)
    }
}

/// Options of [`IamPolicyManagement::delete_role`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteRoleOptions {
    /// Required
    pub role_id: Option<String>,
    pub headers: HeaderList,
}

impl DeleteRoleOptions {
    pub fn new(role_id: impl Into<String>) -> Self {
        Self {
            role_id: Some(role_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(DeleteRoleOptions {
    with_role_id => role_id: String,
});

impl Operation for DeleteRoleOptions {
    type Output = ();
    const OPERATION_ID: &'static str = "DeleteRole";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<RequestBuilder> {
        let role_id = required_str(&self.role_id, "role_id")?;
        Ok(RequestBuilder::delete("/v2/roles/{role_id}")
            .path_param("role_id", role_id)
            .headers(&self.headers))
    }
}

impl IamPolicyManagement {
    /// List custom, service and system roles
    pub async fn list_roles(
        &self,
        options: &ListRolesOptions,
    ) -> Result<DetailedResponse<RoleCollection>> {
        self.execute(options).await
    }

    /// Create a custom role
    pub async fn create_role(
        &self,
        options: &CreateRoleOptions,
    ) -> Result<DetailedResponse<CustomRole>> {
        self.execute(options).await
    }

    /// Get a custom role by ID
    pub async fn get_role(&self, options: &GetRoleOptions) -> Result<DetailedResponse<CustomRole>> {
        self.execute(options).await
    }

    /// Replace the display name, actions and description of a custom role
    pub async fn replace_role(
        &self,
        options: &ReplaceRoleOptions,
    ) -> Result<DetailedResponse<CustomRole>> {
        self.execute(options).await
    }

    /// Delete a custom role
    pub async fn delete_role(&self, options: &DeleteRoleOptions) -> Result<DetailedResponse<()>> {
        self.execute(options).await
    }
}
