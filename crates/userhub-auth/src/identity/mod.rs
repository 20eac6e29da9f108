//! Identity resolution.

pub mod resolver;

pub use resolver::IdentityResolver;
