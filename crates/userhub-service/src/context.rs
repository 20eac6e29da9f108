//! Request context carrying the resolved caller, if any.

use userhub_core::error::AppError;
use userhub_entity::user::User;

/// Per-request identity carrier.
///
/// Created anonymous at pipeline entry and upgraded once authentication
/// and identity resolution succeed. Never shared between requests.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    user: Option<User>,
}

impl RequestContext {
    /// A context with no resolved user.
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// Attach a resolved user.
    pub fn authenticated(self, user: User) -> Self {
        Self { user: Some(user) }
    }

    /// The resolved user, or an authentication error.
    pub fn require_user(&self) -> Result<&User, AppError> {
        self.user
            .as_ref()
            .ok_or_else(|| AppError::authentication("unauthorized: unauthenticated"))
    }
}
