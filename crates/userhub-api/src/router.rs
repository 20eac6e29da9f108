//! Route definitions for the UserHub HTTP API.
//!
//! All routes are mounted under `/v1` behind the rate-limit stage. The
//! remaining pipeline stages are attached per route group with
//! `route_layer`, so unmatched paths fall through to a plain 404.

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};

use crate::handlers;
use crate::middleware::{
    PermissionGuard, authenticate_token, basic_auth, rate_limit, require_login,
    require_permission,
};
use crate::state::AppState;

/// Permission required to read user records.
pub const USER_READ: &str = "user:read";

/// Build the complete Axum router.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let v1 = Router::new()
        .merge(health_routes(&state))
        .merge(auth_routes())
        .merge(user_routes(&state))
        .layer(from_fn_with_state(state.clone(), rate_limit));

    Router::new().nest("/v1", v1).with_state(state)
}

/// Liveness probe (public) and detailed health (basic auth).
fn health_routes(state: &AppState) -> Router<AppState> {
    let detailed = Router::new()
        .route("/health/detailed", get(handlers::health::health_detailed))
        .route_layer(from_fn_with_state(state.clone(), basic_auth));

    Router::new()
        .route("/health", get(handlers::health::health))
        .merge(detailed)
}

/// Registration and login.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
}

/// User lookup. Layers added later run first: token auth resolves the
/// caller before the permission or login check sees it.
fn user_routes(state: &AppState) -> Router<AppState> {
    let directory = Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users/{id}", get(handlers::user::get_user))
        .route_layer(from_fn_with_state(
            PermissionGuard::new(state.clone(), USER_READ),
            require_permission,
        ))
        .route_layer(from_fn_with_state(state.clone(), authenticate_token));

    let me = Router::new()
        .route("/users/me", get(handlers::user::me))
        .route_layer(from_fn(require_login))
        .route_layer(from_fn_with_state(state.clone(), authenticate_token));

    directory.merge(me)
}
