//! Axum middleware stack.
//!
//! Protected routes run the authorization pipeline in this order:
//! rate limit, authentication (token or basic), identity resolution,
//! permission check, handler.

pub mod auth;
pub mod cors;
pub mod logging;
pub mod rate_limit;
pub mod rbac;

pub use auth::{authenticate_token, basic_auth};
pub use rate_limit::{FixedWindowLimiter, rate_limit};
pub use rbac::{PermissionGuard, require_login, require_permission};
