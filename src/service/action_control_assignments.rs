//! Action control template assignments

use super::IamPolicyManagement;
use crate::error::Result;
use crate::http::{DetailedResponse, RequestBuilder};
use crate::models::{
    ActionControlAssignment, ActionControlAssignmentCollection, ActionControlAssignmentTemplate,
    AssignmentTargetDetails,
};
use crate::operation::{required, required_str, Operation};
use crate::pagination::{ActionControlAssignmentsPager, Pager};
use crate::types::HeaderList;
use serde::Serialize;

const ASSIGNMENTS_PATH: &str = "/v1/action_control_assignments";
const ASSIGNMENT_PATH: &str = "/v1/action_control_assignments/{assignment_id}";

/// Options of [`IamPolicyManagement::list_action_control_assignments`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListActionControlAssignmentsOptions {
    /// Required
    pub account_id: Option<String>,
    pub accept_language: Option<String>,
    pub template_id: Option<String>,
    pub template_version: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
    pub headers: HeaderList,
}

impl ListActionControlAssignmentsOptions {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(ListActionControlAssignmentsOptions {
    with_account_id => account_id: String,
    with_accept_language => accept_language: String,
    with_template_id => template_id: String,
    with_template_version => template_version: String,
    with_limit => limit: i64,
    with_start => start: String,
});

impl Operation for ListActionControlAssignmentsOptions {
    type Output = ActionControlAssignmentCollection;
    const OPERATION_ID: &'static str = "ListActionControlAssignments";

    fn build_request(&self) -> Result<RequestBuilder> {
        let account_id = required(&self.account_id, "account_id")?;

        Ok(RequestBuilder::get(ASSIGNMENTS_PATH)
            .headers(&self.headers)
            .optional_header("Accept-Language", self.accept_language.as_ref())
            .query("account_id", account_id)
            .optional_query("template_id", self.template_id.as_ref())
            .optional_query("template_version", self.template_version.as_ref())
            .optional_query("limit", self.limit.as_ref())
            .optional_query("start", self.start.as_ref()))
    }
}

impl_list_operation!(ListActionControlAssignmentsOptions);

#[derive(Serialize)]
struct CreateAssignmentBody<'a> {
    target: &'a AssignmentTargetDetails,
    templates: &'a [ActionControlAssignmentTemplate],
}

/// Options of [`IamPolicyManagement::create_action_control_template_assignment`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateActionControlTemplateAssignmentOptions {
    /// Required
    pub target: Option<AssignmentTargetDetails>,
    /// Required
    pub templates: Option<Vec<ActionControlAssignmentTemplate>>,
    pub accept_language: Option<String>,
    pub headers: HeaderList,
}

impl CreateActionControlTemplateAssignmentOptions {
    pub fn new(
        target: AssignmentTargetDetails,
        templates: Vec<ActionControlAssignmentTemplate>,
    ) -> Self {
        Self {
            target: Some(target),
            templates: Some(templates),
            ..Self::default()
        }
    }
}

options_setters!(CreateActionControlTemplateAssignmentOptions {
    with_target => target: AssignmentTargetDetails,
    with_templates => templates: Vec<ActionControlAssignmentTemplate>,
    with_accept_language => accept_language: String,
});

impl Operation for CreateActionControlTemplateAssignmentOptions {
    type Output = ActionControlAssignmentCollection;
    const OPERATION_ID: &'static str = "CreateActionControlTemplateAssignment";

    fn build_request(&self) -> Result<RequestBuilder> {
        let body = CreateAssignmentBody {
            target: required(&self.target, "target")?,
            templates: required(&self.templates, "templates")?,
        };

        RequestBuilder::post(ASSIGNMENTS_PATH)
            .headers(&self.headers)
            .optional_header("Accept-Language", self.accept_language.as_ref())
            .json_body(&body)
    }
}

/// Options of [`IamPolicyManagement::get_action_control_assignment`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetActionControlAssignmentOptions {
    /// Required
    pub assignment_id: Option<String>,
    pub headers: HeaderList,
}

impl GetActionControlAssignmentOptions {
    pub fn new(assignment_id: impl Into<String>) -> Self {
        Self {
            assignment_id: Some(assignment_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(GetActionControlAssignmentOptions {
    with_assignment_id => assignment_id: String,
});

impl Operation for GetActionControlAssignmentOptions {
    type Output = ActionControlAssignment;
    const OPERATION_ID: &'static str = "GetActionControlAssignment";

    fn build_request(&self) -> Result<RequestBuilder> {
        let assignment_id = required_str(&self.assignment_id, "assignment_id")?;
        Ok(RequestBuilder::get(ASSIGNMENT_PATH)
            .path_param("assignment_id", assignment_id)
            .headers(&self.headers))
    }
}

#[derive(Serialize)]
struct UpdateAssignmentBody<'a> {
    template_version: &'a str,
}

/// Options of [`IamPolicyManagement::update_action_control_assignment`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateActionControlAssignmentOptions {
    /// Required
    pub assignment_id: Option<String>,
    /// Required
    pub if_match: Option<String>,
    /// Required
    pub template_version: Option<String>,
    pub headers: HeaderList,
}

impl UpdateActionControlAssignmentOptions {
    pub fn new(
        assignment_id: impl Into<String>,
        if_match: impl Into<String>,
        template_version: impl Into<String>,
    ) -> Self {
        Self {
            assignment_id: Some(assignment_id.into()),
            if_match: Some(if_match.into()),
            template_version: Some(template_version.into()),
            ..Self::default()
        }
    }
}

options_setters!(UpdateActionControlAssignmentOptions {
    with_assignment_id => assignment_id: String,
    with_if_match => if_match: String,
    with_template_version => template_version: String,
});

impl Operation for UpdateActionControlAssignmentOptions {
    type Output = ActionControlAssignment;
    const OPERATION_ID: &'static str = "UpdateActionControlAssignment";

    fn build_request(&self) -> Result<RequestBuilder> {
        let assignment_id = required_str(&self.assignment_id, "assignment_id")?;
        let if_match = required(&self.if_match, "if_match")?;
        let template_version = required(&self.template_version, "template_version")?;

        RequestBuilder::patch(ASSIGNMENT_PATH)
            .path_param("assignment_id", assignment_id)
            .headers(&self.headers)
            .header("If-Match", if_match.clone())
            .json_body(&UpdateAssignmentBody {
                template_version: template_version.as_str(),
            })
    }
}

/// Options of [`IamPolicyManagement::delete_action_control_assignment`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteActionControlAssignmentOptions {
    /// Required
    pub assignment_id: Option<String>,
    pub headers: HeaderList,
}

impl DeleteActionControlAssignmentOptions {
    pub fn new(assignment_id: impl Into<String>) -> Self {
        Self {
            assignment_id: Some(assignment_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(DeleteActionControlAssignmentOptions {
    with_assignment_id => assignment_id: String,
});

impl Operation for DeleteActionControlAssignmentOptions {
    type Output = ();
    const OPERATION_ID: &'static str = "DeleteActionControlAssignment";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<RequestBuilder> {
        let assignment_id = required_str(&self.assignment_id, "assignment_id")?;
        Ok(RequestBuilder::delete(ASSIGNMENT_PATH)
            .path_param("assignment_id", assignment_id)
            .headers(&self.headers))
    }
}

impl IamPolicyManagement {
    /// List action control assignments of an account, one page per call
    pub async fn list_action_control_assignments(
        &self,
        options: &ListActionControlAssignmentsOptions,
    ) -> Result<DetailedResponse<ActionControlAssignmentCollection>> {
        self.execute(options).await
    }

    /// Pager over every action control assignment matching `options`
    pub fn new_action_control_assignments_pager(
        &self,
        options: &ListActionControlAssignmentsOptions,
    ) -> Result<ActionControlAssignmentsPager> {
        Pager::new(self, options)
    }

    /// Assign action control templates to an account or account group
    pub async fn create_action_control_template_assignment(
        &self,
        options: &CreateActionControlTemplateAssignmentOptions,
    ) -> Result<DetailedResponse<ActionControlAssignmentCollection>> {
        self.execute(options).await
    }

    /// Get an action control assignment by ID
    pub async fn get_action_control_assignment(
        &self,
        options: &GetActionControlAssignmentOptions,
    ) -> Result<DetailedResponse<ActionControlAssignment>> {
        self.execute(options).await
    }

    /// Move an action control assignment to another template version
    pub async fn update_action_control_assignment(
        &self,
        options: &UpdateActionControlAssignmentOptions,
    ) -> Result<DetailedResponse<ActionControlAssignment>> {
        self.execute(options).await
    }

    /// Delete an action control assignment
    pub async fn delete_action_control_assignment(
        &self,
        options: &DeleteActionControlAssignmentOptions,
    ) -> Result<DetailedResponse<()>> {
        self.execute(options).await
    }
}
