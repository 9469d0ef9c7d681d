//! Tests for the service operations

use super::*;
use crate::auth::AuthConfig;
use crate::http::RequestBuilder;
use crate::models::{
    ActionControlAssignmentTemplate, AssignmentTargetDetails, AssignmentTemplateDetails, Control,
    ExternalAccountIdentityInteraction, IdentityTypes, IdentityTypesBase, PolicyResource,
    PolicyRole, PolicySubject, ResourceAttribute, SubjectAttribute, TemplateActionControl,
    TemplatePolicy, V2PolicyResource, V2PolicyResourceAttribute,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use test_case::test_case;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> IamPolicyManagement {
    let config = ServiceConfig::new(AuthConfig::NoAuth).with_service_url(server.uri());
    IamPolicyManagement::new(config).unwrap()
}

fn sample_policy_parts() -> (Vec<PolicySubject>, Vec<PolicyRole>, Vec<PolicyResource>) {
    let subjects = vec![PolicySubject::new(vec![SubjectAttribute::new(
        "iam_id",
        "IBMid-123453user",
    )])];
    let roles = vec![PolicyRole::new("crn:v1:bluemix:public:iam::::role:Viewer")];
    let resources = vec![PolicyResource::new(vec![
        ResourceAttribute::new("accountId", "acct-1"),
        ResourceAttribute::new("serviceName", "iam-groups"),
    ])];
    (subjects, roles, resources)
}

fn body_of(builder: &RequestBuilder) -> serde_json::Value {
    serde_json::from_slice(builder.body().unwrap()).unwrap()
}

// ============================================================================
// Client
// ============================================================================

#[test]
fn test_client_rejects_invalid_auth() {
    let err = IamPolicyManagement::new(ServiceConfig::new(AuthConfig::iam(""))).unwrap_err();
    assert!(matches!(err, Error::Config { .. } | Error::Auth { .. } | Error::MissingRequiredField { .. }));
}

#[test]
fn test_client_defaults_and_deadline() {
    let client = IamPolicyManagement::new(ServiceConfig::new(AuthConfig::NoAuth)).unwrap();
    assert_eq!(client.service_url(), "https://iam.cloud.ibm.com");
    assert_eq!(client.deadline(), None);

    let limited = client.with_timeout(Duration::from_millis(80));
    assert_eq!(limited.deadline(), Some(Duration::from_millis(80)));
    assert_eq!(limited.without_timeout().deadline(), None);
    // the original client is untouched
    assert_eq!(client.deadline(), None);
}

#[test]
fn test_set_service_url() {
    let mut client = IamPolicyManagement::new(ServiceConfig::new(AuthConfig::NoAuth)).unwrap();
    client.set_service_url("https://private.iam.cloud.ibm.com");
    assert_eq!(client.service_url(), "https://private.iam.cloud.ibm.com");
}

#[test]
fn test_analytics_header_value() {
    assert_eq!(
        analytics_header_value("ListPolicies"),
        "service_name=iam_policy_management;service_version=V1;operation_id=ListPolicies"
    );
}

#[tokio::test]
async fn test_empty_service_url_fails_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut client = client(&server);
    client.set_service_url("");
    let err = client
        .get_policy(&GetPolicyOptions::new("p1"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[tokio::test]
async fn test_sdk_headers_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/policies/p1"))
        .and(header(
            SDK_ANALYTICS_HEADER,
            "service_name=iam_policy_management;service_version=V1;operation_id=GetPolicy",
        ))
        .and(header("Accept", "application/json"))
        .and(header("X-Test", "yes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "p1"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .get_policy(&GetPolicyOptions::new("p1").header("X-Test", "yes"))
        .await
        .unwrap();
    assert_eq!(response.status_code, 200);
    assert_eq!(response.result.unwrap().id.as_deref(), Some("p1"));
}

// ============================================================================
// Required fields
// ============================================================================

#[test_case(ListPoliciesOptions::default().build_request(), "account_id" ; "list policies")]
#[test_case(GetPolicyOptions::default().build_request(), "policy_id" ; "get policy")]
#[test_case(GetPolicyOptions::new("").build_request(), "policy_id" ; "get policy empty id")]
#[test_case(DeletePolicyOptions::default().build_request(), "policy_id" ; "delete policy")]
#[test_case(UpdatePolicyStateOptions::default().with_policy_id("p1").build_request(), "if_match" ; "update policy state")]
#[test_case(CreatePolicyOptions::default().with_policy_type("access").build_request(), "subjects" ; "create policy")]
#[test_case(CreateRoleOptions::default().with_display_name("Role").build_request(), "actions" ; "create role")]
#[test_case(ReplaceRoleOptions::new("r1", "", "Role", vec![]).with_if_match("e").with_role_id("").build_request(), "role_id" ; "replace role empty id")]
#[test_case(ListV2PoliciesOptions::default().build_request(), "account_id" ; "list v2 policies")]
#[test_case(CreateV2PolicyOptions::default().with_policy_type("access").build_request(), "control" ; "create v2 policy")]
#[test_case(ReplaceV2PolicyOptions::default().with_id("v2").build_request(), "if_match" ; "replace v2 policy")]
#[test_case(ListPolicyTemplatesOptions::default().build_request(), "account_id" ; "list policy templates")]
#[test_case(CreatePolicyTemplateOptions::default().with_name("t").with_account_id("a").build_request(), "policy" ; "create policy template")]
#[test_case(GetPolicyTemplateVersionOptions::default().with_policy_template_id("t1").build_request(), "version" ; "get template version")]
#[test_case(CommitPolicyTemplateOptions::default().build_request(), "policy_template_id" ; "commit policy template")]
#[test_case(ListPolicyAssignmentsOptions::default().with_account_id("a").build_request(), "version" ; "list policy assignments")]
#[test_case(UpdatePolicyAssignmentOptions::default().with_assignment_id("a1").with_version("1.0").with_if_match("e").build_request(), "template_version" ; "update policy assignment")]
#[test_case(GetSettingsOptions::default().build_request(), "account_id" ; "get settings")]
#[test_case(UpdateSettingsOptions::default().with_account_id("a").build_request(), "if_match" ; "update settings")]
#[test_case(CreateActionControlTemplateOptions::default().with_name("n").build_request(), "account_id" ; "create action control template")]
#[test_case(ReplaceActionControlTemplateOptions::default().with_action_control_template_id("t").with_version("1").build_request(), "if_match" ; "replace action control template")]
#[test_case(CreateActionControlTemplateAssignmentOptions::default().build_request(), "target" ; "create action control assignment")]
#[test_case(DeleteActionControlAssignmentOptions::default().build_request(), "assignment_id" ; "delete action control assignment")]
fn test_missing_required_field(result: Result<RequestBuilder>, expected: &str) {
    match result.unwrap_err() {
        Error::MissingRequiredField { field } => assert_eq!(field, expected),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .create_policy(&CreatePolicyOptions::default().with_policy_type("access"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField { .. }));

    let err = client
        .create_role(&CreateRoleOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField { .. }));
}

// ============================================================================
// Request shape
// ============================================================================

#[test]
fn test_list_policies_query_order() {
    let builder = ListPoliciesOptions::new("acct-1")
        .with_iam_id("IBMid-1")
        .with_policy_type("access")
        .with_sort("-id")
        .with_limit(50)
        .build_request()
        .unwrap();

    let query: Vec<(&str, &str)> = builder
        .query_pairs()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        query,
        vec![
            ("account_id", "acct-1"),
            ("iam_id", "IBMid-1"),
            ("type", "access"),
            ("sort", "-id"),
            ("limit", "50"),
        ]
    );
}

#[test]
fn test_custom_headers_come_first() {
    let builder = ListPoliciesOptions::new("acct-1")
        .header("X-First", "1")
        .header("X-Second", "2")
        .with_accept_language("fr")
        .build_request()
        .unwrap();

    assert_eq!(
        builder.header_list(),
        &vec![
            ("X-First".to_string(), "1".to_string()),
            ("X-Second".to_string(), "2".to_string()),
            ("Accept-Language".to_string(), "fr".to_string()),
        ]
    );
}

#[test]
fn test_create_policy_body() {
    let (subjects, roles, resources) = sample_policy_parts();
    let builder = CreatePolicyOptions::new("access", subjects, roles, resources)
        .with_description("Viewer on groups")
        .build_request()
        .unwrap();

    assert_eq!(
        body_of(&builder),
        json!({
            "type": "access",
            "subjects": [{"attributes": [{"name": "iam_id", "value": "IBMid-123453user"}]}],
            "roles": [{"role_id": "crn:v1:bluemix:public:iam::::role:Viewer"}],
            "resources": [{"attributes": [
                {"name": "accountId", "value": "acct-1"},
                {"name": "serviceName", "value": "iam-groups"}
            ]}],
            "description": "Viewer on groups"
        })
    );
}

#[test]
fn test_update_policy_state_without_state_sends_empty_object() {
    let builder = UpdatePolicyStateOptions::new("p1", "etag-1")
        .build_request()
        .unwrap();
    assert_eq!(body_of(&builder), json!({}));
}

#[test]
fn test_create_v2_policy_body_skips_absent_fields() {
    let builder = CreateV2PolicyOptions::new(
        Control::grant_roles(["crn:v1:bluemix:public:iam::::role:Viewer"]),
        "access",
    )
    .with_resource(V2PolicyResource::new(vec![V2PolicyResourceAttribute::new(
        "accountId",
        "stringEquals",
        "acct-1",
    )]))
    .build_request()
    .unwrap();

    assert_eq!(
        body_of(&builder),
        json!({
            "control": {"grant": {"roles": [{"role_id": "crn:v1:bluemix:public:iam::::role:Viewer"}]}},
            "type": "access",
            "resource": {"attributes": [
                {"key": "accountId", "operator": "stringEquals", "value": "acct-1"}
            ]}
        })
    );
}

#[test]
fn test_template_paths() {
    let builder = CommitPolicyTemplateOptions::new("t 1", "2")
        .build_request()
        .unwrap();
    let url = builder.resolve_url("https://iam.cloud.ibm.com").unwrap();
    assert_eq!(
        url.as_str(),
        "https://iam.cloud.ibm.com/v1/policy_templates/t%201/versions/2/commit"
    );

    let builder = ListActionControlTemplateVersionsOptions::new("act-1")
        .with_state("active")
        .build_request()
        .unwrap();
    let url = builder.resolve_url("https://iam.cloud.ibm.com/").unwrap();
    assert_eq!(
        url.as_str(),
        "https://iam.cloud.ibm.com/v1/action_control_templates/act-1/versions?state=active"
    );
}

#[test]
fn test_options_setters_round_trip() {
    let options = ListV2PoliciesOptions::new("acct-1")
        .with_iam_id("IBMid-1")
        .with_access_group_id("AccessGroupId-1")
        .with_service_name("iam-groups")
        .with_format("include_last_permit")
        .with_state("active")
        .with_limit(10);

    assert_eq!(options.account_id.as_deref(), Some("acct-1"));
    assert_eq!(options.iam_id.as_deref(), Some("IBMid-1"));
    assert_eq!(options.access_group_id.as_deref(), Some("AccessGroupId-1"));
    assert_eq!(options.service_name.as_deref(), Some("iam-groups"));
    assert_eq!(options.format.as_deref(), Some("include_last_permit"));
    assert_eq!(options.state.as_deref(), Some("active"));
    assert_eq!(options.limit, Some(10));
    assert_eq!(options.start, None);
}

// ============================================================================
// Policies (v1)
// ============================================================================

#[tokio::test]
async fn test_create_policy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/policies"))
        .and(header("Accept-Language", "en"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "policy-1",
            "type": "access",
            "state": "active",
            "created_at": "2024-01-15T10:30:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (subjects, roles, resources) = sample_policy_parts();
    let response = client(&server)
        .create_policy(
            &CreatePolicyOptions::new("access", subjects, roles, resources)
                .with_accept_language("en"),
        )
        .await
        .unwrap();

    assert_eq!(response.status_code, 201);
    let policy = response.result.unwrap();
    assert_eq!(policy.id.as_deref(), Some("policy-1"));
    assert_eq!(policy.policy_type.as_deref(), Some("access"));
    assert!(policy.created_at.is_some());
}

#[tokio::test]
async fn test_replace_policy_sends_if_match() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/policies/policy-1"))
        .and(header("If-Match", "W/\"abc\""))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("ETag", "W/\"def\"")
                .set_body_json(json!({"id": "policy-1", "description": "updated"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (subjects, roles, resources) = sample_policy_parts();
    let response = client(&server)
        .replace_policy(
            &ReplacePolicyOptions::new("policy-1", "W/\"abc\"", "access", subjects, roles, resources)
                .with_description("updated"),
        )
        .await
        .unwrap();

    assert_eq!(response.etag(), Some("W/\"def\""));
    assert_eq!(
        response.result.unwrap().description.as_deref(),
        Some("updated")
    );
}

#[tokio::test]
async fn test_update_policy_state() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/policies/policy-1"))
        .and(header("If-Match", "etag-1"))
        .and(body_json(json!({"state": "active"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "policy-1", "state": "active"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .update_policy_state(&UpdatePolicyStateOptions::new("policy-1", "etag-1").with_state("active"))
        .await
        .unwrap();
    assert_eq!(response.result.unwrap().state.as_deref(), Some("active"));
}

#[tokio::test]
async fn test_delete_policy_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/policies/policy-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .delete_policy(&DeletePolicyOptions::new("policy-1"))
        .await
        .unwrap();
    assert_eq!(response.status_code, 204);
    assert!(response.result.is_none());
}

#[tokio::test]
async fn test_get_policy_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/policies/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "trace": "trace-1",
            "errors": [{"code": "policy_not_found", "message": "Policy was not found."}],
            "status_code": 404
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .get_policy(&GetPolicyOptions::new("missing"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    match err {
        Error::Service { code, message, body, .. } => {
            assert_eq!(code.as_deref(), Some("policy_not_found"));
            assert_eq!(message, "Policy was not found.");
            assert_eq!(body.unwrap().trace.as_deref(), Some("trace-1"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Roles
// ============================================================================

#[tokio::test]
async fn test_list_roles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/roles"))
        .and(query_param("account_id", "acct-1"))
        .and(query_param("service_name", "iam-groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "custom_roles": [{"id": "r1", "name": "Custom", "display_name": "Custom", "actions": ["iam-groups.groups.read"]}],
            "service_roles": [{"role_id": "crn:v1:bluemix:public:iam-groups::::serviceRole:Manager", "display_name": "Manager"}],
            "system_roles": [{"role_id": "crn:v1:bluemix:public:iam::::role:Viewer", "display_name": "Viewer"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let roles = client(&server)
        .list_roles(
            &ListRolesOptions::new()
                .with_account_id("acct-1")
                .with_service_name("iam-groups"),
        )
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(roles.custom_roles.len(), 1);
    assert_eq!(roles.service_roles.len(), 1);
    assert_eq!(roles.system_roles.len(), 1);
    assert_eq!(roles.len(), 3);
}

#[tokio::test]
async fn test_create_and_replace_role() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/roles"))
        .and(body_json(json!({
            "display_name": "Group reader",
            "actions": ["iam-groups.groups.read"],
            "name": "GroupReader",
            "account_id": "acct-1",
            "service_name": "iam-groups"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "role-1", "name": "GroupReader"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v2/roles/role-1"))
        .and(header("If-Match", "etag-1"))
        .and(body_json(json!({
            "display_name": "Group reader",
            "actions": ["iam-groups.groups.read", "iam-groups.groups.list"],
            "description": "Reads groups"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "role-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let created = client
        .create_role(&CreateRoleOptions::new(
            "Group reader",
            vec!["iam-groups.groups.read".to_string()],
            "GroupReader",
            "acct-1",
            "iam-groups",
        ))
        .await
        .unwrap();
    assert_eq!(created.status_code, 201);

    let replaced = client
        .replace_role(
            &ReplaceRoleOptions::new(
                "role-1",
                "etag-1",
                "Group reader",
                vec![
                    "iam-groups.groups.read".to_string(),
                    "iam-groups.groups.list".to_string(),
                ],
            )
            .with_description("Reads groups"),
        )
        .await
        .unwrap();
    assert_eq!(replaced.result.unwrap().id.as_deref(), Some("role-1"));
}

// ============================================================================
// Policies (v2)
// ============================================================================

#[tokio::test]
async fn test_get_v2_policy_with_format() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/policies/v2-1"))
        .and(query_param("format", "display"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "v2-1",
            "type": "access",
            "control": {"grant": {"roles": [{
                "role_id": "crn:v1:bluemix:public:iam::::role:Viewer",
                "display_name": "Viewer",
                "actions": [{"id": "iam.policy.read", "display_name": "Read", "description": "Read policies"}]
            }]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let policy = client(&server)
        .get_v2_policy(&GetV2PolicyOptions::new("v2-1").with_format("display"))
        .await
        .unwrap()
        .into_result()
        .unwrap();

    let roles = policy.control.unwrap().grant.roles;
    assert_eq!(roles[0].display_name.as_deref(), Some("Viewer"));
    assert_eq!(roles[0].actions[0].id, "iam.policy.read");
}

#[tokio::test]
async fn test_delete_v2_policy() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/policies/v2-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .delete_v2_policy(&DeleteV2PolicyOptions::new("v2-1"))
        .await
        .unwrap();
    assert!(response.result.is_none());
}

// ============================================================================
// Policy templates and assignments
// ============================================================================

#[tokio::test]
async fn test_create_policy_template() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/policy_templates"))
        .and(body_json(json!({
            "name": "Viewer template",
            "account_id": "acct-1",
            "policy": {
                "type": "access",
                "control": {"grant": {"roles": [{"role_id": "crn:v1:bluemix:public:iam::::role:Viewer"}]}}
            },
            "committed": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "policyTemplate-1",
            "version": "1",
            "committed": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let policy = TemplatePolicy::new("access")
        .with_control(Control::grant_roles(["crn:v1:bluemix:public:iam::::role:Viewer"]));
    let template = client(&server)
        .create_policy_template(
            &CreatePolicyTemplateOptions::new("Viewer template", "acct-1", policy)
                .with_committed(true),
        )
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(template.id.as_deref(), Some("policyTemplate-1"));
    assert_eq!(template.committed, Some(true));
}

#[tokio::test]
async fn test_commit_policy_template() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/policy_templates/policyTemplate-1/versions/2/commit"))
        .and(header("If-Match", "etag-2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .commit_policy_template(
            &CommitPolicyTemplateOptions::new("policyTemplate-1", "2").with_if_match("etag-2"),
        )
        .await
        .unwrap();
    assert_eq!(response.status_code, 204);
}

#[tokio::test]
async fn test_create_policy_template_assignment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/policy_assignments"))
        .and(query_param("version", "1.0"))
        .and(body_json(json!({
            "target": {"type": "Account", "id": "acct-2"},
            "templates": [{"id": "policyTemplate-1", "version": "1"}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "assignments": [{
                "id": "assignment-1",
                "status": "in_progress",
                "target": {"type": "Account", "id": "acct-2"}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .create_policy_template_assignment(&CreatePolicyTemplateAssignmentOptions::new(
            "1.0",
            AssignmentTargetDetails::new("Account", "acct-2"),
            vec![AssignmentTemplateDetails::new("policyTemplate-1", "1")],
        ))
        .await
        .unwrap();

    let assignments = response.result.unwrap().assignments;
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].status.as_deref(), Some("in_progress"));
}

#[tokio::test]
async fn test_update_policy_assignment() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/policy_assignments/assignment-1"))
        .and(query_param("version", "1.0"))
        .and(header("If-Match", "etag-1"))
        .and(body_json(json!({"template_version": "2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "assignment-1",
            "template": {"id": "policyTemplate-1", "version": "2"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let assignment = client(&server)
        .update_policy_assignment(&UpdatePolicyAssignmentOptions::new(
            "assignment-1",
            "1.0",
            "etag-1",
            "2",
        ))
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(assignment.template.unwrap().version.as_deref(), Some("2"));
}

// ============================================================================
// Settings
// ============================================================================

#[tokio::test]
async fn test_update_settings() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/accounts/acct-1/settings/access_management"))
        .and(header("If-Match", "etag-1"))
        .and(header("Accept-Language", "en"))
        .and(body_json(json!({
            "external_account_identity_interaction": {
                "identity_types": {"user": {"state": "monitor", "external_allowed_accounts": []}}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "external_account_identity_interaction": {
                "identity_types": {"user": {"state": "monitor", "external_allowed_accounts": []}}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let patch = ExternalAccountIdentityInteraction {
        identity_types: Some(IdentityTypes {
            user: Some(IdentityTypesBase::new("monitor")),
            ..IdentityTypes::default()
        }),
    };
    let settings = client(&server)
        .update_settings(
            &UpdateSettingsOptions::new("acct-1", "etag-1")
                .with_accept_language("en")
                .with_external_account_identity_interaction(patch),
        )
        .await
        .unwrap()
        .into_result()
        .unwrap();

    let user = settings
        .external_account_identity_interaction
        .and_then(|e| e.identity_types)
        .and_then(|t| t.user)
        .unwrap();
    assert_eq!(user.state, "monitor");
}

// ============================================================================
// Action controls
// ============================================================================

#[tokio::test]
async fn test_create_action_control_template() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/action_control_templates"))
        .and(body_json(json!({
            "name": "Restrict writes",
            "account_id": "acct-1",
            "action_control": {"service_name": "am-test-service", "actions": ["am-test-service.test.create"]}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "actionControlTemplate-1",
            "version": "1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let template = client(&server)
        .create_action_control_template(
            &CreateActionControlTemplateOptions::new("Restrict writes", "acct-1").with_action_control(
                TemplateActionControl::new(
                    "am-test-service",
                    vec!["am-test-service.test.create".to_string()],
                ),
            ),
        )
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(template.version.as_deref(), Some("1"));
}

#[tokio::test]
async fn test_action_control_assignment_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/action_control_assignments"))
        .and(body_json(json!({
            "target": {"type": "Account", "id": "acct-2"},
            "templates": [{"id": "actionControlTemplate-1", "version": "1"}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "assignments": [{"id": "aca-1", "status": "accepted"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/action_control_assignments/aca-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("ETag", "etag-aca")
                .set_body_json(json!({"id": "aca-1", "status": "succeeded"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/action_control_assignments/aca-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let created = client
        .create_action_control_template_assignment(
            &CreateActionControlTemplateAssignmentOptions::new(
                AssignmentTargetDetails::new("Account", "acct-2"),
                vec![ActionControlAssignmentTemplate::new("actionControlTemplate-1", "1")],
            ),
        )
        .await
        .unwrap();
    let id = created.result.unwrap().assignments[0].id.clone().unwrap();

    let fetched = client
        .get_action_control_assignment(&GetActionControlAssignmentOptions::new(id.as_str()))
        .await
        .unwrap();
    assert_eq!(fetched.etag(), Some("etag-aca"));
    assert_eq!(fetched.result.unwrap().status.as_deref(), Some("succeeded"));

    let deleted = client
        .delete_action_control_assignment(&DeleteActionControlAssignmentOptions::new(id))
        .await
        .unwrap();
    assert_eq!(deleted.status_code, 204);
}
