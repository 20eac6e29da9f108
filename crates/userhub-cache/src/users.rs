//! Typed user cache used by the identity resolver.

use std::time::Duration;

use tracing::debug;

use userhub_core::result::AppResult;
use userhub_core::traits::cache::CacheProvider;
use userhub_entity::user::User;

use crate::keys;
use crate::provider::CacheManager;

/// Read-through replica of user records keyed by user ID.
#[derive(Debug, Clone)]
pub struct UserCache {
    cache: CacheManager,
    ttl: Duration,
}

impl UserCache {
    /// Wrap a cache manager; entries expire after `ttl`.
    pub fn new(cache: CacheManager, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    /// Fetch a cached user. `Ok(None)` on a miss.
    pub async fn get(&self, user_id: i64) -> AppResult<Option<User>> {
        let user = self.cache.get_json::<User>(&keys::user_by_id(user_id)).await?;
        debug!(user_id, hit = user.is_some(), "User cache lookup");
        Ok(user)
    }

    /// Store a user under its ID.
    pub async fn set(&self, user: &User) -> AppResult<()> {
        self.cache
            .set_json(&keys::user_by_id(user.id), user, self.ttl)
            .await
    }

    /// Drop a cached user.
    pub async fn delete(&self, user_id: i64) -> AppResult<()> {
        self.cache.delete(&keys::user_by_id(user_id)).await
    }

    /// Check the backing provider.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.cache.health_check().await
    }
}
