//! In-memory store for single-node development and tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use userhub_core::error::AppError;
use userhub_core::result::AppResult;
use userhub_core::types::PageRequest;
use userhub_entity::permission::Permission;
use userhub_entity::user::{CreateUser, User};

use crate::store::{PermissionStore, UserStore};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    next_user_id: i64,
    permissions: HashMap<String, i32>,
    role_permissions: HashMap<i32, Vec<i32>>,
}

/// In-memory implementation of [`UserStore`] and [`PermissionStore`].
///
/// Mirrors the relational seed data: role 1 (`admin`) holds `user:read`
/// and `user:write`, role 2 (`member`) holds nothing.
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    available: AtomicBool,
    user_lookups: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store with no roles or permissions.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                next_user_id: 1,
                ..Tables::default()
            }),
            available: AtomicBool::new(true),
            user_lookups: AtomicUsize::new(0),
        }
    }

    /// Create a store holding the default role grants.
    pub async fn seeded() -> Self {
        let store = Self::new();
        store.grant(1, "user:read").await;
        store.grant(1, "user:write").await;
        store
    }

    /// Grant a named permission to a role.
    pub async fn grant(&self, role_id: i32, permission: &str) {
        let mut tables = self.tables.write().await;
        let next_id = tables.permissions.len() as i32 + 1;
        let permission_id = *tables
            .permissions
            .entry(permission.to_string())
            .or_insert(next_id);
        let grants = tables.role_permissions.entry(role_id).or_default();
        if !grants.contains(&permission_id) {
            grants.push(permission_id);
        }
    }

    /// Change the role of an existing user.
    pub async fn set_role(&self, user_id: i64, role_id: i32) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        let user = tables
            .users
            .get_mut(&user_id)
            .ok_or_else(|| AppError::not_found(format!("user {user_id} not found")))?;
        user.role_id = role_id;
        Ok(())
    }

    /// Toggle availability; while unavailable every call fails with a
    /// database error.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of `get_user_by_id` calls served so far.
    pub fn user_lookups(&self) -> usize {
        self.user_lookups.load(Ordering::SeqCst)
    }

    fn ensure_available(&self) -> AppResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::database("memory store is unavailable"))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get_user_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.ensure_available()?;
        self.user_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.ensure_available()?;
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, data: &CreateUser) -> AppResult<User> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == data.email) {
            return Err(AppError::conflict("email already exists"));
        }
        let id = tables.next_user_id;
        tables.next_user_id += 1;
        let user = User {
            id,
            email: data.email.clone(),
            username: data.username.clone(),
            full_name: data.full_name.clone(),
            password_hash: data.password_hash.clone(),
            role_id: data.role_id,
            created_at: Utc::now(),
        };
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    async fn list_users(&self, page: &PageRequest) -> AppResult<Vec<User>> {
        self.ensure_available()?;
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.available.load(Ordering::SeqCst))
    }
}

#[async_trait]
impl PermissionStore for MemoryStore {
    async fn get_permissions_by_role_id(&self, role_id: i32) -> AppResult<Vec<Permission>> {
        self.ensure_available()?;
        let tables = self.tables.read().await;
        let Some(grants) = tables.role_permissions.get(&role_id) else {
            return Ok(Vec::new());
        };
        Ok(tables
            .permissions
            .iter()
            .filter(|(_, id)| grants.contains(id))
            .map(|(name, id)| Permission {
                id: *id,
                name: name.clone(),
            })
            .collect())
    }
}
