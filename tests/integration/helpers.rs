//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use userhub_api::{AppState, build_app};
use userhub_auth::password::PasswordHasher;
use userhub_cache::CacheManager;
use userhub_cache::memory::MemoryCacheProvider;
use userhub_core::config::{AppConfig, MemoryCacheConfig};
use userhub_database::MemoryStore;

/// Password used for every test account.
pub const PASSWORD: &str = "password123";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store, for seeding and fault injection
    pub store: Arc<MemoryStore>,
    /// Wired application state
    pub state: AppState,
}

/// Captured response
pub struct TestResponse {
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// JSON body (`Value::Null` when empty)
    pub body: Value,
}

impl TestResponse {
    /// The `error` field of an error body.
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

impl TestApp {
    /// Application without a cache and with a generous rate limit.
    pub async fn new() -> Self {
        Self::build(|_| {}, false).await
    }

    /// Application with the in-memory cache enabled.
    pub async fn with_cache() -> Self {
        Self::build(|_| {}, true).await
    }

    /// Application with a customized configuration.
    pub async fn with_config(customize: impl FnOnce(&mut AppConfig)) -> Self {
        Self::build(customize, false).await
    }

    async fn build(customize: impl FnOnce(&mut AppConfig), cache_enabled: bool) -> Self {
        let mut config = AppConfig::default();
        config.auth.token.secret = "integration-test-secret".to_string();
        config.rate_limiter.requests_per_window = 1_000;
        config.cache.enabled = cache_enabled;
        config.cache.provider = "memory".to_string();
        customize(&mut config);

        let store = Arc::new(MemoryStore::seeded().await);

        let cache = config.cache.enabled.then(|| {
            CacheManager::from_provider(Arc::new(MemoryCacheProvider::new(&MemoryCacheConfig {
                max_capacity: 1_000,
            })))
        });

        let hasher = PasswordHasher::with_params(1024, 1, 1).expect("valid argon2 params");
        let state = AppState::new(config, store.clone(), store.clone(), cache, hasher);
        let router = build_app(state.clone());

        Self {
            router,
            store,
            state,
        }
    }

    /// Send a request with an optional JSON body and bearer token.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let authorization = token.map(|t| format!("Bearer {t}"));
        self.request_with_auth(method, uri, body, authorization.as_deref())
            .await
    }

    /// Send a request with a raw `Authorization` header value.
    pub async fn request_with_auth(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header("authorization", value);
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Register an account through the API and return its id.
    pub async fn register(&self, email: &str, username: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/v1/auth/register",
                Some(serde_json::json!({
                    "email": email,
                    "password": PASSWORD,
                    "username": username,
                    "fullname": format!("{username} Tester"),
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["id"].as_i64().unwrap()
    }

    /// Log in through the API and return the token.
    pub async fn login(&self, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/v1/auth/login",
                Some(serde_json::json!({ "email": email, "password": PASSWORD })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["token"].as_str().unwrap().to_string()
    }

    /// Register an account holding role 1 (`admin`) and return its token.
    pub async fn admin_token(&self, email: &str) -> String {
        let id = self.register(email, "admin").await;
        self.store.set_role(id, 1).await.unwrap();
        self.login(email).await
    }

    /// Register a default-role account and return its token.
    pub async fn member_token(&self, email: &str) -> String {
        self.register(email, "member").await;
        self.login(email).await
    }
}
