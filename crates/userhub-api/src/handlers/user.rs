//! User lookup handlers.

use axum::Json;
use axum::extract::{Path, State};

use userhub_core::error::AppError;

use crate::dto::response::UserResponse;
use crate::extractors::path::parse_user_id;
use crate::extractors::{CurrentUser, PaginationParams, QueryParams};
use crate::state::AppState;

/// GET /v1/users
pub async fn list_users(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<PaginationParams>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state
        .user_service
        .list_users(params.into_page_request())
        .await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_user_id(&id)?;
    let user = state.user_service.get_user(id).await?;

    Ok(Json(UserResponse::from(user)))
}

/// GET /v1/users/me
pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}
