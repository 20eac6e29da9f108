//! Auth handlers: register and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use userhub_core::error::AppError;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{LoginResponse, UserResponse};
use crate::extractors::JsonBody;
use crate::state::AppState;

/// POST /v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let account = req.into_account()?;
    let user = state.auth_service.register(account).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (email, password) = req.into_credentials()?;
    let token = state.auth_service.login(&email, &password).await?;

    Ok(Json(LoginResponse { token }))
}
