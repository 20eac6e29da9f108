//! RBAC enforcement: checks whether a role holds a named permission.

use tracing::debug;

use userhub_core::error::{AppError, ErrorKind};

use super::resolver::PermissionResolver;

/// Enforces per-route permission requirements.
#[derive(Debug, Clone)]
pub struct RbacEnforcer {
    resolver: PermissionResolver,
}

impl RbacEnforcer {
    /// Creates an enforcer backed by `resolver`.
    pub fn new(resolver: PermissionResolver) -> Self {
        Self { resolver }
    }

    /// Succeeds iff `role_id` holds `permission`.
    ///
    /// A failure to load the role's permissions is reported as an
    /// authorization error wrapping the cause.
    pub async fn require_permission(&self, role_id: i32, permission: &str) -> Result<(), AppError> {
        let granted = self
            .resolver
            .permissions_for_role(role_id)
            .await
            .map_err(|e| {
                AppError::wrap(ErrorKind::Authorization, "failed to retrieve permissions", e)
            })?;

        if granted.contains(permission) {
            Ok(())
        } else {
            debug!(role_id, permission, "Permission denied");
            Err(AppError::authorization(
                "you don't have permission to perform this action",
            ))
        }
    }
}
