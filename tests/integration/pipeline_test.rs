//! Integration tests for the authorization pipeline stages.

mod helpers;

use axum::http::StatusCode;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use helpers::TestApp;
use serde_json::json;

use userhub_auth::jwt::{Claims, TokenAuthenticator};
use userhub_core::config::TokenConfig;

fn basic(credentials: &str) -> String {
    format!("Basic {}", STANDARD.encode(credentials))
}

#[tokio::test]
async fn test_malformed_authorization_headers() {
    let app = TestApp::new().await;

    for header in ["Bearer", "Token abc", "Bearer a b", "bearer abc"] {
        let response = app
            .request_with_auth("GET", "/v1/users", None, Some(header))
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{header:?}");
        assert_eq!(
            response.error(),
            "unauthorized: authorization header is malformed"
        );
    }
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/v1/users", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.error().starts_with("unauthorized: "));
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = TestApp::new().await;
    let id = app.register("late@example.com", "late").await;

    let now = Utc::now().timestamp();
    let token = app
        .state
        .tokens
        .generate_token(Claims {
            user_id: id,
            role_id: 2,
            iss: "userhub".to_string(),
            aud: "userhub".to_string(),
            iat: now - 120,
            exp: now - 60,
            sub: id.to_string(),
        })
        .unwrap();

    let response = app.request("GET", "/v1/users/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_unauthorized() {
    let app = TestApp::new().await;
    let id = app.register("forged@example.com", "forged").await;

    let forger = TokenAuthenticator::new(&TokenConfig {
        secret: "some-other-secret".to_string(),
        ..TokenConfig::default()
    });
    let token = forger.issue_for(id, 1).unwrap();

    let response = app.request("GET", "/v1/users/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_unknown_user_is_unauthorized() {
    let app = TestApp::new().await;
    let token = app.state.tokens.issue_for(4242, 1).unwrap();

    let response = app.request("GET", "/v1/users/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "unauthorized");
}

#[tokio::test]
async fn test_identity_store_failure_is_unauthorized() {
    let app = TestApp::new().await;
    let token = app.member_token("flaky@example.com").await;
    app.store.set_available(false);

    let response = app.request("GET", "/v1/users/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "unauthorized");
}

#[tokio::test]
async fn test_identity_without_cache_reads_store_every_time() {
    let app = TestApp::new().await;
    let token = app.member_token("nocache@example.com").await;
    let before = app.store.user_lookups();

    for _ in 0..2 {
        let response = app.request("GET", "/v1/users/me", None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::OK);
    }

    assert_eq!(app.store.user_lookups() - before, 2);
}

#[tokio::test]
async fn test_identity_cache_aside_fetches_once() {
    let app = TestApp::with_cache().await;
    let token = app.member_token("cached@example.com").await;
    let before = app.store.user_lookups();

    for _ in 0..3 {
        let response = app.request("GET", "/v1/users/me", None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["email"], "cached@example.com");
    }

    assert_eq!(app.store.user_lookups() - before, 1);
}

#[tokio::test]
async fn test_permission_fetch_failure_is_forbidden() {
    let app = TestApp::with_cache().await;
    let token = app.admin_token("root@example.com").await;

    let response = app.request("GET", "/v1/users", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    // Identity now comes from the cache; only the permission read fails.
    app.store.set_available(false);
    let response = app.request("GET", "/v1/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error(), "failed to retrieve permissions");
}

#[tokio::test]
async fn test_rate_limit_rejects_with_retry_after() {
    let app = TestApp::with_config(|c| {
        c.rate_limiter.requests_per_window = 2;
        c.rate_limiter.window_seconds = 5;
    })
    .await;

    for _ in 0..2 {
        let response = app.request("GET", "/v1/health", None, None).await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app.request("GET", "/v1/health", None, None).await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers.get("retry-after").unwrap(), "5");
    assert_eq!(response.error(), "rate limit exceeded, retry after: 5s");
}

#[tokio::test]
async fn test_rate_limit_runs_before_authentication() {
    let app = TestApp::with_config(|c| c.rate_limiter.requests_per_window = 1).await;

    let first = app.request("GET", "/v1/users", None, None).await;
    assert_eq!(first.status, StatusCode::UNAUTHORIZED);

    let second = app.request("GET", "/v1/users", None, None).await;
    assert_eq!(second.status, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_rate_limit_disabled_allows_everything() {
    let app = TestApp::with_config(|c| {
        c.rate_limiter.enabled = false;
        c.rate_limiter.requests_per_window = 1;
    })
    .await;

    for _ in 0..5 {
        let response = app.request("GET", "/v1/health", None, None).await;
        assert_eq!(response.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_rate_limit_keys_on_forwarded_client() {
    let app = TestApp::with_config(|c| c.rate_limiter.requests_per_window = 1).await;

    let send = |ip: &'static str| {
        let router = app.router.clone();
        async move {
            use tower::ServiceExt;
            let request = axum::http::Request::builder()
                .uri("/v1/health")
                .header("x-forwarded-for", ip)
                .body(axum::body::Body::empty())
                .unwrap();
            router.oneshot(request).await.unwrap().status()
        }
    };

    assert_eq!(send("203.0.113.1").await, StatusCode::OK);
    assert_eq!(send("203.0.113.1").await, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(send("203.0.113.2").await, StatusCode::OK);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/v1/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["env"], "development");
}

#[tokio::test]
async fn test_detailed_health_requires_basic_auth() {
    let app = TestApp::new().await;

    let response = app
        .request_with_auth("GET", "/v1/health/detailed", None, Some(basic("admin:admin").as_str()))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["database"], "connected");
    assert_eq!(response.body["cache"], "disabled");

    for header in [basic("admin:wrong"), basic("admin"), "Basic !!!".to_string()] {
        let response = app
            .request_with_auth("GET", "/v1/health/detailed", None, Some(header.as_str()))
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{header:?}");
        let challenge = response.headers.get("www-authenticate").unwrap();
        assert!(challenge.to_str().unwrap().starts_with(r#"Basic realm="restricted""#));
    }
}

#[tokio::test]
async fn test_detailed_health_reports_degraded_store() {
    let app = TestApp::with_cache().await;
    app.store.set_available(false);

    let response = app
        .request_with_auth("GET", "/v1/health/detailed", None, Some(basic("admin:admin").as_str()))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "degraded");
    assert_eq!(response.body["database"], "unavailable");
    assert_eq!(response.body["cache"], "connected");
}

#[tokio::test]
async fn test_store_failure_is_sanitized() {
    let app = TestApp::new().await;
    app.store.set_available(false);

    let response = app
        .request(
            "POST",
            "/v1/auth/register",
            Some(json!({
                "email": "down@example.com",
                "password": "password123",
                "username": "down",
                "fullname": "Down",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error(), "the server encountered a problem");
}

#[tokio::test]
async fn test_cors_preflight_for_allowed_origin() {
    let app = TestApp::new().await;

    use tower::ServiceExt;
    let request = axum::http::Request::builder()
        .method("OPTIONS")
        .uri("/v1/users")
        .header("origin", "http://localhost:5174")
        .header("access-control-request-method", "GET")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "http://localhost:5174"
    );
}
