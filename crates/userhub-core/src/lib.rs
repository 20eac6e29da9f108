//! # userhub-core
//!
//! Core crate for UserHub. Contains configuration schemas, the cache
//! provider trait, pagination types, and the unified error system
//! (including its HTTP mapping).
//!
//! This crate has **no** internal dependencies on other UserHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
