//! Health check handlers.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::dto::response::{DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /v1/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        env: state.config.server.env.clone(),
    })
}

/// GET /v1/health/detailed
pub async fn health_detailed(State(state): State<AppState>) -> Json<DetailedHealthResponse> {
    let database = match state.users.health_check().await {
        Ok(true) => "connected",
        Ok(false) => "unavailable",
        Err(e) => {
            warn!(error = %e, "Store health check failed");
            "unavailable"
        }
    };

    let cache = match &state.user_cache {
        None => "disabled",
        Some(cache) => match cache.health_check().await {
            Ok(true) => "connected",
            Ok(false) => "unavailable",
            Err(e) => {
                warn!(error = %e, "Cache health check failed");
                "unavailable"
            }
        },
    };

    let healthy = database == "connected" && cache != "unavailable";

    Json(DetailedHealthResponse {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        database: database.to_string(),
        cache: cache.to_string(),
    })
}
