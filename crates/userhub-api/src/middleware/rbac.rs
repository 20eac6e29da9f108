//! Authorization stages: per-route permission checks and require-login.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use userhub_core::error::AppError;
use userhub_entity::user::User;
use userhub_service::RequestContext;

use crate::state::AppState;

/// Middleware state binding the application state to one required permission.
#[derive(Debug, Clone)]
pub struct PermissionGuard {
    state: AppState,
    permission: &'static str,
}

impl PermissionGuard {
    /// Guard requiring `permission` of the caller's role.
    pub fn new(state: AppState, permission: &'static str) -> Self {
        Self { state, permission }
    }
}

/// Forwards only when the resolved caller's role grants the guarded permission.
///
/// Must run after a stage that resolves the caller.
pub async fn require_permission(
    State(guard): State<PermissionGuard>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let role_id = caller(&request)?.role_id;
    guard
        .state
        .rbac
        .require_permission(role_id, guard.permission)
        .await?;

    Ok(next.run(request).await)
}

/// Forwards only when a caller has been resolved.
pub async fn require_login(request: Request, next: Next) -> Result<Response, AppError> {
    caller(&request)?;
    Ok(next.run(request).await)
}

fn caller(request: &Request) -> Result<&User, AppError> {
    request
        .extensions()
        .get::<RequestContext>()
        .ok_or_else(|| AppError::authentication("unauthorized: unauthenticated"))?
        .require_user()
}
