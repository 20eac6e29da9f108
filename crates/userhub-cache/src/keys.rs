//! Cache key builders for all UserHub cache entries.
//!
//! Provider-level prefixes (e.g. the Redis `key_prefix`) are applied on
//! top of these keys.

/// Cache key for a user entity by ID.
pub fn user_by_id(user_id: i64) -> String {
    format!("user:{user_id}")
}
