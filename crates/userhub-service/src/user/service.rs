//! User lookup and listing.

use std::sync::Arc;

use userhub_core::error::AppError;
use userhub_core::types::PageRequest;
use userhub_database::store::UserStore;
use userhub_entity::user::User;

/// Read-side user operations.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Fetch one user.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.users
            .get_user_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("user not found"))
    }

    /// List one page of users ordered by id.
    pub async fn list_users(&self, page: PageRequest) -> Result<Vec<User>, AppError> {
        self.users.list_users(&page.normalized()).await
    }
}
