//! # userhub-database
//!
//! PostgreSQL connection management, the store traits consumed by the
//! authorization pipeline and services, and their Postgres and in-memory
//! implementations.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use repositories::{MemoryStore, PermissionRepository, UserRepository};
pub use store::{PermissionStore, UserStore};
