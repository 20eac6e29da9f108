//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Duration;

use userhub_auth::basic::BasicAuthenticator;
use userhub_auth::identity::IdentityResolver;
use userhub_auth::jwt::TokenAuthenticator;
use userhub_auth::password::PasswordHasher;
use userhub_auth::rbac::{PermissionResolver, RbacEnforcer};
use userhub_cache::{CacheManager, UserCache};
use userhub_core::config::AppConfig;
use userhub_database::store::{PermissionStore, UserStore};
use userhub_service::{AuthService, UserService};

use crate::middleware::rate_limit::FixedWindowLimiter;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped (or wrap `Arc`s) for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// User store (Postgres in production, in-memory in tests)
    pub users: Arc<dyn UserStore>,
    /// Typed user cache, when caching is enabled
    pub user_cache: Option<UserCache>,

    // ── Authorization pipeline ───────────────────────────────
    /// Bearer token issuer/validator
    pub tokens: Arc<TokenAuthenticator>,
    /// Fixed basic-auth credential check
    pub basic: Arc<BasicAuthenticator>,
    /// Cache-aside user lookup
    pub identity: IdentityResolver,
    /// Role permission enforcement
    pub rbac: Arc<RbacEnforcer>,
    /// Per-client request limiter
    pub rate_limiter: Arc<FixedWindowLimiter>,

    // ── Services ─────────────────────────────────────────────
    /// Registration and login
    pub auth_service: Arc<AuthService>,
    /// User lookup
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Wire every component from configuration and the injected stores.
    ///
    /// `cache` is `None` when caching is disabled; identity resolution then
    /// reads the store directly.
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        permissions: Arc<dyn PermissionStore>,
        cache: Option<CacheManager>,
        hasher: PasswordHasher,
    ) -> Self {
        let user_cache = cache.map(|cache| {
            UserCache::new(cache, Duration::from_secs(config.cache.default_ttl_seconds))
        });

        let tokens = Arc::new(TokenAuthenticator::new(&config.auth.token));
        let basic = Arc::new(BasicAuthenticator::new(&config.auth.basic));
        let identity = IdentityResolver::new(Arc::clone(&users), user_cache.clone());
        let rbac = Arc::new(RbacEnforcer::new(PermissionResolver::new(permissions)));
        let rate_limiter = Arc::new(FixedWindowLimiter::new(
            config.rate_limiter.requests_per_window,
            config.rate_limiter.window(),
        ));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&users),
            Arc::new(hasher),
            Arc::clone(&tokens),
            identity.clone(),
            config.auth.default_role_id,
        ));
        let user_service = Arc::new(UserService::new(Arc::clone(&users)));

        Self {
            config: Arc::new(config),
            users,
            user_cache,
            tokens,
            basic,
            identity,
            rbac,
            rate_limiter,
            auth_service,
            user_service,
        }
    }
}
