//! `CurrentUser` extractor: the caller resolved by the authorization pipeline.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use userhub_core::error::AppError;
use userhub_entity::user::User;
use userhub_service::RequestContext;

/// The authenticated caller, read from the request's [`RequestContext`].
///
/// Rejects with 401 when no pipeline stage resolved a user.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl std::ops::Deref for CurrentUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<RequestContext>()
            .ok_or_else(|| AppError::authentication("unauthorized: unauthenticated"))?
            .require_user()?;
        Ok(CurrentUser(user.clone()))
    }
}
