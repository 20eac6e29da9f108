//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user in the UserHub system.
///
/// The password hash is part of the serialized form so that cached copies
/// are complete; API responses go through their own DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Unique, lower-cased email address.
    pub email: String,
    /// Display username.
    pub username: String,
    /// Full name.
    pub full_name: String,
    /// Password hash (PHC string).
    #[sqlx(rename = "password")]
    pub password_hash: String,
    /// Assigned role.
    pub role_id: i32,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Normalized email address.
    pub email: String,
    /// Username.
    pub username: String,
    /// Full name.
    pub full_name: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role_id: i32,
}
