//! # userhub-service
//!
//! Business logic service layer for UserHub. Services orchestrate the
//! stores, the credential hasher and the token authenticator to implement
//! registration, login and user lookup.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod user;

pub use auth::{AuthService, NewAccount};
pub use context::RequestContext;
pub use user::UserService;
