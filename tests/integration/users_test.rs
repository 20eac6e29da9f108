//! Integration tests for permission-gated user lookup.

mod helpers;

use axum::http::StatusCode;
use helpers::TestApp;

#[tokio::test]
async fn test_admin_lists_users() {
    let app = TestApp::new().await;
    let token = app.admin_token("admin@example.com").await;
    app.register("one@example.com", "one").await;
    app.register("two@example.com", "two").await;

    let response = app.request("GET", "/v1/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.body.as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));
}

#[tokio::test]
async fn test_list_users_paginates() {
    let app = TestApp::new().await;
    let token = app.admin_token("admin@example.com").await;
    for i in 0..4 {
        app.register(&format!("user{i}@example.com"), &format!("user{i}"))
            .await;
    }

    let response = app
        .request("GET", "/v1/users?page=2&page_size=2", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["email"], "user1@example.com");
}

#[tokio::test]
async fn test_list_users_rejects_non_numeric_page() {
    let app = TestApp::new().await;
    let token = app.admin_token("admin@example.com").await;

    let response = app
        .request("GET", "/v1/users?page=abc", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        !response.error().is_empty(),
        "expected a JSON error body, got {:?}",
        response.body
    );
}

#[tokio::test]
async fn test_list_users_far_past_last_page_is_empty() {
    let app = TestApp::new().await;
    let token = app.admin_token("admin@example.com").await;

    let response = app
        .request(
            "GET",
            &format!("/v1/users?page={}&page_size=100", u64::MAX),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_member_is_forbidden() {
    let app = TestApp::new().await;
    let token = app.member_token("member@example.com").await;

    let response = app.request("GET", "/v1/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.error(),
        "you don't have permission to perform this action"
    );
}

#[tokio::test]
async fn test_granting_permission_to_role_allows_access() {
    let app = TestApp::new().await;
    let token = app.member_token("member@example.com").await;
    app.store.grant(2, "user:read").await;

    let response = app.request("GET", "/v1/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = TestApp::new().await;
    let token = app.admin_token("admin@example.com").await;
    let id = app.register("target@example.com", "target").await;

    let response = app
        .request("GET", &format!("/v1/users/{id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);
    assert_eq!(response.body["email"], "target@example.com");
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    let app = TestApp::new().await;
    let token = app.admin_token("admin@example.com").await;

    let response = app
        .request("GET", "/v1/users/9999", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error(), "user not found");
}

#[tokio::test]
async fn test_get_user_non_numeric_id() {
    let app = TestApp::new().await;
    let token = app.admin_token("admin@example.com").await;

    let response = app
        .request("GET", "/v1/users/abc", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_returns_caller_without_permission() {
    let app = TestApp::new().await;
    let token = app.member_token("me@example.com").await;

    let response = app.request("GET", "/v1/users/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "me@example.com");
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/v1/users/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.error(),
        "unauthorized: authorization header is missing"
    );
}
