//! Typed path parameter helpers.

use userhub_core::error::AppError;

/// Parses a numeric user ID from a path segment.
pub fn parse_user_id(s: &str) -> Result<i64, AppError> {
    s.parse::<i64>()
        .map_err(|_| AppError::validation(format!("invalid user id: {s}")))
}
