//! Policy template assignments

use super::IamPolicyManagement;
use crate::error::Result;
use crate::http::{DetailedResponse, RequestBuilder};
use crate::models::{
    AssignmentTargetDetails, AssignmentTemplateDetails, PolicyAssignmentV1,
    PolicyAssignmentV1Collection, PolicyTemplateAssignmentCollection,
};
use crate::operation::{required, required_str, Operation};
use crate::pagination::{Pager, PolicyAssignmentsPager};
use crate::types::HeaderList;
use serde::Serialize;

const ASSIGNMENTS_PATH: &str = "/v1/policy_assignments";
const ASSIGNMENT_PATH: &str = "/v1/policy_assignments/{assignment_id}";

/// Options of [`IamPolicyManagement::list_policy_assignments`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPolicyAssignmentsOptions {
    /// API version of the assignment schema, e.g. `1.0` (required)
    pub version: Option<String>,
    /// Required
    pub account_id: Option<String>,
    pub accept_language: Option<String>,
    pub template_id: Option<String>,
    pub template_version: Option<String>,
    pub limit: Option<i64>,
    pub start: Option<String>,
    pub headers: HeaderList,
}

impl ListPolicyAssignmentsOptions {
    pub fn new(version: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            account_id: Some(account_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(ListPolicyAssignmentsOptions {
    with_version => version: String,
    with_account_id => account_id: String,
    with_accept_language => accept_language: String,
    with_template_id => template_id: String,
    with_template_version => template_version: String,
    with_limit => limit: i64,
    with_start => start: String,
});

impl Operation for ListPolicyAssignmentsOptions {
    type Output = PolicyTemplateAssignmentCollection;
    const OPERATION_ID: &'static str = "ListPolicyAssignments";

    fn build_request(&self) -> Result<RequestBuilder> {
        let version = required(&self.version, "version")?;
        let account_id = required(&self.account_id, "account_id")?;

        Ok(RequestBuilder::get(ASSIGNMENTS_PATH)
            .headers(&self.headers)
            .optional_header("Accept-Language", self.accept_language.as_ref())
            .query("version", version)
            .query("account_id", account_id)
            .optional_query("template_id", self.template_id.as_ref())
            .optional_query("template_version", self.template_version.as_ref())
            .optional_query("limit", self.limit.as_ref())
            .optional_query("start", self.start.as_ref()))
    }
}

impl_list_operation!(ListPolicyAssignmentsOptions);

#[derive(Serialize)]
struct CreateAssignmentBody<'a> {
    target: &'a AssignmentTargetDetails,
    templates: &'a [AssignmentTemplateDetails],
}

/// Options of [`IamPolicyManagement::create_policy_template_assignment`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatePolicyTemplateAssignmentOptions {
    /// Required
    pub version: Option<String>,
    /// Account or account group receiving the templates (required)
    pub target: Option<AssignmentTargetDetails>,
    /// Required
    pub templates: Option<Vec<AssignmentTemplateDetails>>,
    pub accept_language: Option<String>,
    pub headers: HeaderList,
}

impl CreatePolicyTemplateAssignmentOptions {
    pub fn new(
        version: impl Into<String>,
        target: AssignmentTargetDetails,
        templates: Vec<AssignmentTemplateDetails>,
    ) -> Self {
        Self {
            version: Some(version.into()),
            target: Some(target),
            templates: Some(templates),
            ..Self::default()
        }
    }
}

options_setters!(CreatePolicyTemplateAssignmentOptions {
    with_version => version: String,
    with_target => target: AssignmentTargetDetails,
    with_templates => templates: Vec<AssignmentTemplateDetails>,
    with_accept_language => accept_language: String,
});

impl Operation for CreatePolicyTemplateAssignmentOptions {
    type Output = PolicyAssignmentV1Collection;
    const OPERATION_ID: &'static str = "CreatePolicyTemplateAssignment";

    fn build_request(&self) -> Result<RequestBuilder> {
        let version = required(&self.version, "version")?;
        let body = CreateAssignmentBody {
            target: required(&self.target, "target")?,
            templates: required(&self.templates, "templates")?,
        };

        RequestBuilder::post(ASSIGNMENTS_PATH)
            .headers(&self.headers)
            .optional_header("Accept-Language", self.accept_language.as_ref())
            .query("version", version)
            .json_body(&body)
    }
}

/// Options of [`IamPolicyManagement::get_policy_assignment`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetPolicyAssignmentOptions {
    /// Required
    pub assignment_id: Option<String>,
    /// Required
    pub version: Option<String>,
    pub headers: HeaderList,
}

impl GetPolicyAssignmentOptions {
    pub fn new(assignment_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            assignment_id: Some(assignment_id.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }
}

options_setters!(GetPolicyAssignmentOptions {
    with_assignment_id => assignment_id: String,
    with_version => version: String,
});

impl Operation for GetPolicyAssignmentOptions {
    type Output = PolicyAssignmentV1;
    const OPERATION_ID: &'static str = "GetPolicyAssignment";

    fn build_request(&self) -> Result<RequestBuilder> {
        let assignment_id = required_str(&self.assignment_id, "assignment_id")?;
        let version = required(&self.version, "version")?;

        Ok(RequestBuilder::get(ASSIGNMENT_PATH)
            .path_param("assignment_id", assignment_id)
            .headers(&self.headers)
            .query("version", version))
    }
}

#[derive(Serialize)]
struct UpdateAssignmentBody<'a> {
    template_version: &'a str,
}

/// Options of [`IamPolicyManagement::update_policy_assignment`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePolicyAssignmentOptions {
    /// Required
    pub assignment_id: Option<String>,
    /// Required
    pub version: Option<String>,
    /// Required
    pub if_match: Option<String>,
    /// Template version to move the assignment to (required)
    pub template_version: Option<String>,
    pub headers: HeaderList,
}

impl UpdatePolicyAssignmentOptions {
    pub fn new(
        assignment_id: impl Into<String>,
        version: impl Into<String>,
        if_match: impl Into<String>,
        template_version: impl Into<String>,
    ) -> Self {
        Self {
            assignment_id: Some(assignment_id.into()),
            version: Some(version.into()),
            if_match: Some(if_match.into()),
            template_version: Some(template_version.into()),
            ..Self::default()
        }
    }
}

options_setters!(UpdatePolicyAssignmentOptions {
    with_assignment_id => assignment_id: String,
    with_version => version: String,
    with_if_match => if_match: String,
    with_template_version => template_version: String,
});

impl Operation for UpdatePolicyAssignmentOptions {
    type Output = PolicyAssignmentV1;
    const OPERATION_ID: &'static str = "UpdatePolicyAssignment";

    fn build_request(&self) -> Result<RequestBuilder> {
        let assignment_id = required_str(&self.assignment_id, "assignment_id")?;
        let version = required(&self.version, "version")?;
        let if_match = required(&self.if_match, "if_match")?;
        let template_version = required(&self.template_version, "template_version")?;

        RequestBuilder::patch(ASSIGNMENT_PATH)
            .path_param("assignment_id", assignment_id)
            .headers(&self.headers)
            .header("If-Match", if_match.clone())
            .query("version", version)
            .json_body(&UpdateAssignmentBody {
                template_version: template_version.as_str(),
            })
    }
}

/// Options of [`IamPolicyManagement::delete_policy_assignment`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeletePolicyAssignmentOptions {
    /// Required
    pub assignment_id: Option<String>,
    pub headers: HeaderList,
}

impl DeletePolicyAssignmentOptions {
    pub fn new(assignment_id: impl Into<String>) -> Self {
        Self {
            assignment_id: Some(assignment_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(DeletePolicyAssignmentOptions {
    with_assignment_id => assignment_id: String,
});

impl Operation for DeletePolicyAssignmentOptions {
    type Output = ();
    const OPERATION_ID: &'static str = "DeletePolicyAssignment";
    const EXPECTS_BODY: bool = false;

    fn build_request(&self) -> Result<RequestBuilder> {
        let assignment_id = required_str(&self.assignment_id, "assignment_id")?;
        Ok(RequestBuilder::delete(ASSIGNMENT_PATH)
            .path_param("assignment_id", assignment_id)
            .headers(&self.headers))
    }
}

impl IamPolicyManagement {
    /// List policy template assignments of an account, one page per call
    pub async fn list_policy_assignments(
        &self,
        options: &ListPolicyAssignmentsOptions,
    ) -> Result<DetailedResponse<PolicyTemplateAssignmentCollection>> {
        self.execute(options).await
    }

    /// Pager over every policy assignment matching `options`
    pub fn new_policy_assignments_pager(
        &self,
        options: &ListPolicyAssignmentsOptions,
    ) -> Result<PolicyAssignmentsPager> {
        Pager::new(self, options)
    }

    /// Assign policy templates to an account or account group
    pub async fn create_policy_template_assignment(
        &self,
        options: &CreatePolicyTemplateAssignmentOptions,
    ) -> Result<DetailedResponse<PolicyAssignmentV1Collection>> {
        self.execute(options).await
    }

    /// Get a policy assignment by ID
    pub async fn get_policy_assignment(
        &self,
        options: &GetPolicyAssignmentOptions,
    ) -> Result<DetailedResponse<PolicyAssignmentV1>> {
        self.execute(options).await
    }

    /// Move a policy assignment to another template version
    pub async fn update_policy_assignment(
        &self,
        options: &UpdatePolicyAssignmentOptions,
    ) -> Result<DetailedResponse<PolicyAssignmentV1>> {
        self.execute(options).await
    }

    /// Delete a policy assignment and the policies it created
    pub async fn delete_policy_assignment(
        &self,
        options: &DeletePolicyAssignmentOptions,
    ) -> Result<DetailedResponse<()>> {
        self.execute(options).await
    }
}
