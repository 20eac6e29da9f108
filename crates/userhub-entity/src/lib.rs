//! # userhub-entity
//!
//! Domain entity models for UserHub. Every struct in this crate represents
//! a database table row or the data needed to create one. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database rows
//! additionally derive `sqlx::FromRow`.

pub mod permission;
pub mod user;
