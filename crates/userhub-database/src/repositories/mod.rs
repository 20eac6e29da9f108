//! Store implementations: Postgres repositories and an in-memory store.

pub mod memory;
pub mod permission;
pub mod user;

pub use memory::MemoryStore;
pub use permission::PermissionRepository;
pub use user::UserRepository;
