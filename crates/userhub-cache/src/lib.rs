//! # userhub-cache
//!
//! Cache provider implementations for UserHub. Supports two modes:
//!
//! - **memory**: In-process cache using [moka](https://crates.io/crates/moka)
//! - **redis**: Redis-backed cache using the [redis](https://crates.io/crates/redis) crate
//!
//! The provider is selected at runtime based on configuration. On top of
//! the string-valued providers sits [`UserCache`], the typed read-through
//! replica used by the identity resolver.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;
pub mod users;

pub use provider::CacheManager;
pub use users::UserCache;
