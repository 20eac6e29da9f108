//! User lookup.

pub mod service;

pub use service::UserService;
