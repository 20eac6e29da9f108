//! Authentication stages of the authorization pipeline.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, warn};

use userhub_core::error::{AppError, ErrorKind};
use userhub_service::RequestContext;

use crate::state::AppState;

/// Bearer token stage: validates the token, resolves the caller and
/// upgrades the request's [`RequestContext`].
pub async fn authenticate_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())?;
    let claims = state.tokens.validate_token(token)?;

    let user = state
        .identity
        .resolve(claims.user_id)
        .await
        .map_err(|e| {
            warn!(user_id = claims.user_id, error = %e, "Identity resolution failed");
            AppError::wrap(ErrorKind::Authentication, "unauthorized", e)
        })?;

    debug!(user_id = user.id, role_id = user.role_id, "Bearer token authenticated");

    let context = request
        .extensions_mut()
        .remove::<RequestContext>()
        .unwrap_or_default()
        .authenticated(user);
    request.extensions_mut().insert(context);

    Ok(next.run(request).await)
}

/// Basic-auth stage: compares the credential pair against configuration.
pub async fn basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|v| v.to_str().unwrap_or_default());
    state.basic.authenticate(header)?;

    Ok(next.run(request).await)
}

/// Extract the token from `Authorization: Bearer <token>`.
///
/// The header must split on single spaces into exactly two parts.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::authentication("unauthorized: authorization header is missing"))?;

    let malformed = || AppError::authentication("unauthorized: authorization header is malformed");
    let value = value.to_str().map_err(|_| malformed())?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(malformed()),
    }
}
