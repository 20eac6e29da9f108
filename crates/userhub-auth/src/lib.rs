//! # userhub-auth
//!
//! Authentication and authorization building blocks for UserHub.
//!
//! ## Modules
//!
//! - `jwt`: signed bearer token issuance and validation
//! - `password`: Argon2id password hashing
//! - `basic`: fixed basic-auth credential check
//! - `identity`: cache-aside user resolution
//! - `rbac`: role → permission resolution and enforcement

pub mod basic;
pub mod identity;
pub mod jwt;
pub mod password;
pub mod rbac;

pub use basic::BasicAuthenticator;
pub use identity::IdentityResolver;
pub use jwt::{Claims, TokenAuthenticator, TokenError};
pub use password::PasswordHasher;
pub use rbac::{PermissionResolver, RbacEnforcer};
