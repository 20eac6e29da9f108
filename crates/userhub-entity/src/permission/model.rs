//! Permission entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named permission granted to roles through `role_permissions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Permission {
    /// Permission identifier.
    pub id: i32,
    /// Permission name, e.g. `user:read`.
    pub name: String,
}
