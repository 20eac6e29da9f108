//! Cache-aside user resolution.

use std::sync::Arc;

use tracing::debug;

use userhub_cache::UserCache;
use userhub_core::error::AppError;
use userhub_core::result::AppResult;
use userhub_database::store::UserStore;
use userhub_entity::user::User;

/// Resolves user IDs to user records, consulting the cache first when one
/// is configured.
#[derive(Clone)]
pub struct IdentityResolver {
    users: Arc<dyn UserStore>,
    cache: Option<UserCache>,
}

impl std::fmt::Debug for IdentityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityResolver")
            .field("cache_enabled", &self.cache.is_some())
            .finish()
    }
}

impl IdentityResolver {
    /// Creates a resolver; `cache` is `None` when caching is disabled.
    pub fn new(users: Arc<dyn UserStore>, cache: Option<UserCache>) -> Self {
        Self { users, cache }
    }

    /// Resolve a user by ID.
    ///
    /// With a cache: a hit returns the cached record, a miss fetches from the
    /// store and writes the record back. Cache read and write failures are
    /// returned as errors.
    pub async fn resolve(&self, user_id: i64) -> AppResult<User> {
        let Some(cache) = &self.cache else {
            return self.fetch(user_id).await;
        };

        if let Some(user) = cache.get(user_id).await? {
            return Ok(user);
        }

        let user = self.fetch(user_id).await?;
        cache.set(&user).await?;
        debug!(user_id, "User cached after store fetch");
        Ok(user)
    }

    /// Drop any cached copy of a user.
    pub async fn invalidate(&self, user_id: i64) -> AppResult<()> {
        match &self.cache {
            Some(cache) => cache.delete(user_id).await,
            None => Ok(()),
        }
    }

    async fn fetch(&self, user_id: i64) -> AppResult<User> {
        self.users
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("user {user_id} not found")))
    }
}
