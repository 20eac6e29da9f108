//! Integration tests for registration and login.

mod helpers;

use axum::http::StatusCode;
use helpers::{PASSWORD, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_register_returns_created_user() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/v1/auth/register",
            Some(json!({
                "email": "  Alice@Example.com ",
                "password": PASSWORD,
                "username": " alice ",
                "fullname": "Alice Liddell",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["email"], "alice@example.com");
    assert_eq!(response.body["username"], "alice");
    assert_eq!(response.body["full_name"], "Alice Liddell");
    assert!(response.body.get("password").is_none());
    assert!(response.body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_is_rejected() {
    let app = TestApp::new().await;
    app.register("dup@example.com", "first").await;

    let response = app
        .request(
            "POST",
            "/v1/auth/register",
            Some(json!({
                "email": "DUP@example.com",
                "password": PASSWORD,
                "username": "second",
                "fullname": "Second",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "email already exists");
}

#[tokio::test]
async fn test_register_validation_errors_are_joined() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/v1/auth/register",
            Some(json!({ "email": "nope", "password": "short" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.error(),
        "invalid email format, password must be at least 8 characters, \
         username is required, fullname is required"
    );
}

#[tokio::test]
async fn test_register_rejects_unparseable_body() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/v1/auth/register", Some(json!([1, 2, 3])), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.error().is_empty());
}

#[tokio::test]
async fn test_login_issues_token_for_user() {
    let app = TestApp::new().await;
    let id = app.register("bob@example.com", "bob").await;

    let token = app.login("bob@example.com").await;
    let claims = app.state.tokens.validate_token(&token).unwrap();

    assert_eq!(claims.user_id, id);
    assert_eq!(claims.role_id, 2);
    assert_eq!(
        claims.exp - claims.iat,
        app.state.config.auth.token.expiry_seconds as i64
    );
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let app = TestApp::new().await;
    app.register("carol@example.com", "carol").await;

    let response = app
        .request(
            "POST",
            "/v1/auth/login",
            Some(json!({ "email": "Carol@Example.COM", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].as_str().is_some());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.register("dave@example.com", "dave").await;

    let response = app
        .request(
            "POST",
            "/v1/auth/login",
            Some(json!({ "email": "dave@example.com", "password": "wrongpassword" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "invalid email or password");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/v1/auth/login",
            Some(json!({ "email": "nobody@example.com", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "invalid email or password");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/v1/auth/login", Some(json!({})), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "email is required, password is required");
}
