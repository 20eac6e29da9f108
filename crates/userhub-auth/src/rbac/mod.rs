//! Role-based access control.

pub mod enforcer;
pub mod resolver;

pub use enforcer::RbacEnforcer;
pub use resolver::PermissionResolver;
