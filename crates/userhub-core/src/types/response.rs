//! Response types shared across API endpoints.

use serde::{Deserialize, Serialize};

/// Body of every error response: `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message, sanitized for server-side failures.
    pub error: String,
}
