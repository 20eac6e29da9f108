//! Core traits defined in `userhub-core` and implemented by other crates.

pub mod cache;

pub use cache::CacheProvider;
