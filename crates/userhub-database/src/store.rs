//! Store seams used by the identity resolver, permission resolver and
//! services.

use async_trait::async_trait;

use userhub_core::result::AppResult;
use userhub_core::types::PageRequest;
use userhub_entity::permission::Permission;
use userhub_entity::user::{CreateUser, User};

/// Persistent access to user records.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch a user by primary key. `Ok(None)` when absent.
    async fn get_user_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Fetch a user by (normalized) email. `Ok(None)` when absent.
    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user. A duplicate email yields a `Conflict` error.
    async fn create_user(&self, data: &CreateUser) -> AppResult<User>;

    /// List users ordered by id.
    async fn list_users(&self, page: &PageRequest) -> AppResult<Vec<User>>;

    /// Check that the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Read access to role → permission grants.
#[async_trait]
pub trait PermissionStore: Send + Sync + std::fmt::Debug + 'static {
    /// All permissions granted to a role. Unknown roles have none.
    async fn get_permissions_by_role_id(&self, role_id: i32) -> AppResult<Vec<Permission>>;
}
