//! Tests for pagination module

use super::*;
use crate::auth::AuthConfig;
use crate::config::ServiceConfig;
use crate::error::Error;
use crate::models::{Next, PolicyCollection};
use crate::service::{IamPolicyManagement, ListPolicyTemplatesOptions};
use futures::TryStreamExt;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> IamPolicyManagement {
    IamPolicyManagement::new(ServiceConfig::new(AuthConfig::NoAuth).with_service_url(server.uri()))
        .unwrap()
}

async fn mount_two_policy_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/policies"))
        .and(query_param("account_id", "acct-1"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 1,
            "first": {"href": "https://iam.cloud.ibm.com/v1/policies?limit=1"},
            "next": {"href": "https://iam.cloud.ibm.com/v1/policies?limit=1&start=cursor-2", "start": "cursor-2"},
            "policies": [{"id": "A"}]
        })))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/policies"))
        .and(query_param("start", "cursor-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 1,
            "policies": [{"id": "B"}]
        })))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// PaginationState
// ============================================================================

#[test]
fn test_pagination_state_new() {
    let state = PaginationState::new();
    assert!(state.has_next);
    assert_eq!(state.cursor, None);
    assert_eq!(state.pages_fetched, 0);
    assert_eq!(state.total_fetched, 0);
    assert_eq!(state, PaginationState::default());
}

#[test]
fn test_pagination_state_record_page() {
    let mut state = PaginationState::new();

    state.record_page(10, Some("c2".to_string()));
    assert!(state.has_next);
    assert_eq!(state.cursor.as_deref(), Some("c2"));

    state.record_page(3, None);
    assert!(!state.has_next);
    assert_eq!(state.cursor, None);
    assert_eq!(state.pages_fetched, 2);
    assert_eq!(state.total_fetched, 13);
}

#[test]
fn test_pagination_state_finish() {
    let mut state = PaginationState::new();
    state.record_page(1, Some("c2".to_string()));
    state.finish();
    assert!(!state.has_next);
    assert_eq!(state.cursor, None);
}

// ============================================================================
// Page
// ============================================================================

#[test]
fn test_page_next_start() {
    let page: PolicyCollection = serde_json::from_value(json!({
        "next": {"start": "abc"},
        "policies": [{"id": "p1"}, {"id": "p2"}]
    }))
    .unwrap();
    assert_eq!(page.next_start().as_deref(), Some("abc"));
    assert_eq!(page.into_items().len(), 2);
}

#[test]
fn test_page_next_start_from_href() {
    let page = PolicyCollection {
        next: Some(Next {
            href: Some("https://iam.cloud.ibm.com/v1/policies?account_id=a&start=xyz".to_string()),
            start: None,
        }),
        ..PolicyCollection::default()
    };
    assert_eq!(page.next_start().as_deref(), Some("xyz"));
}

#[test]
fn test_page_without_next_is_last() {
    let page: PolicyCollection = serde_json::from_value(json!({"policies": []})).unwrap();
    assert_eq!(page.next_start(), None);
}

// ============================================================================
// Pager
// ============================================================================

#[tokio::test]
async fn test_pager_rejects_preset_start() {
    let server = MockServer::start().await;
    let options = ListPoliciesOptions::new("acct-1").with_start("cursor-9");

    let err = Pager::new(&client(&server), &options).unwrap_err();
    match err {
        Error::InvalidField { field, .. } => assert_eq!(field, "start"),
        other => panic!("unexpected error: {other}"),
    }

    // an empty cursor is the same as none
    let options = ListPoliciesOptions::new("acct-1").with_start("");
    assert!(Pager::new(&client(&server), &options).is_ok());
}

#[tokio::test]
async fn test_pager_get_next() {
    let server = MockServer::start().await;
    mount_two_policy_pages(&server).await;

    let mut pager = client(&server)
        .new_policies_pager(&ListPoliciesOptions::new("acct-1").with_limit(1))
        .unwrap();
    assert!(pager.has_next());

    let first = pager.get_next().await.unwrap();
    assert_eq!(first[0].id.as_deref(), Some("A"));
    assert!(pager.has_next());
    assert_eq!(pager.state().cursor.as_deref(), Some("cursor-2"));

    let second = pager.get_next().await.unwrap();
    assert_eq!(second[0].id.as_deref(), Some("B"));
    assert!(!pager.has_next());

    // exhausted: no further requests (the mocks expect exactly one call each)
    assert!(pager.get_next().await.unwrap().is_empty());
    assert_eq!(pager.state().pages_fetched, 2);
}

#[tokio::test]
async fn test_pager_get_all() {
    let server = MockServer::start().await;
    mount_two_policy_pages(&server).await;

    let mut pager = client(&server)
        .new_policies_pager(&ListPoliciesOptions::new("acct-1"))
        .unwrap();
    let ids: Vec<String> = pager
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .filter_map(|p| p.id)
        .collect();

    assert_eq!(ids, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(pager.state().total_fetched, 2);
}

#[tokio::test]
async fn test_pager_leaves_caller_options_untouched() {
    let server = MockServer::start().await;
    mount_two_policy_pages(&server).await;

    let options = ListPoliciesOptions::new("acct-1");
    let mut pager = client(&server).new_policies_pager(&options).unwrap();
    pager.get_all().await.unwrap();

    assert_eq!(options.start, None);
}

#[tokio::test]
async fn test_pager_get_all_fails_fast() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/policy_templates"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": {"start": "t2"},
            "policy_templates": [{"id": "t1"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/policy_templates"))
        .and(query_param("start", "t2"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errors": [{"code": "insufficient_permissions", "message": "Forbidden"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut pager = client(&server)
        .new_policy_templates_pager(&ListPolicyTemplatesOptions::new("acct-1"))
        .unwrap();
    let err = pager.get_all().await.unwrap_err();
    assert_eq!(err.status_code(), Some(403));
}

#[tokio::test]
async fn test_pager_empty_body_ends_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/policies"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut pager = client(&server)
        .new_policies_pager(&ListPoliciesOptions::new("acct-1"))
        .unwrap();
    assert!(pager.get_next().await.unwrap().is_empty());
    assert!(!pager.has_next());
    assert!(pager.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_pager_into_stream() {
    let server = MockServer::start().await;
    mount_two_policy_pages(&server).await;

    let pager = client(&server)
        .new_policies_pager(&ListPoliciesOptions::new("acct-1"))
        .unwrap();
    let pages: Vec<_> = pager.into_stream().try_collect().await.unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1][0].id.as_deref(), Some("B"));
}
