//! # userhub-api
//!
//! HTTP API layer for UserHub built on Axum.
//!
//! Provides the `/v1` REST endpoints, the authorization pipeline
//! middleware (rate limit, token and basic auth, permission checks),
//! extractors and DTOs. Error mapping lives with `AppError` in
//! `userhub-core`.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use middleware::FixedWindowLimiter;
pub use state::AppState;
