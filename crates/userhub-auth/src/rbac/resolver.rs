//! Role → permission resolution.

use std::collections::HashSet;
use std::sync::Arc;

use userhub_core::result::AppResult;
use userhub_database::store::PermissionStore;

/// Maps a role to the names of its granted permissions.
#[derive(Debug, Clone)]
pub struct PermissionResolver {
    store: Arc<dyn PermissionStore>,
}

impl PermissionResolver {
    /// Creates a resolver reading from `store`.
    pub fn new(store: Arc<dyn PermissionStore>) -> Self {
        Self { store }
    }

    /// Permission names granted to `role_id`. Uncached.
    pub async fn permissions_for_role(&self, role_id: i32) -> AppResult<HashSet<String>> {
        let permissions = self.store.get_permissions_by_role_id(role_id).await?;
        Ok(permissions.into_iter().map(|p| p.name).collect())
    }
}
