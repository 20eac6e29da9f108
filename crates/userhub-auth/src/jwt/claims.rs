//! JWT claims structure embedded in every bearer token.

use serde::{Deserialize, Serialize};

/// Claims payload identifying the token's user and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user.
    pub user_id: i64,
    /// Role held at issuance time.
    pub role_id: i32,
    /// Issuer.
    pub iss: String,
    /// Audience.
    pub aud: String,
    /// Issued-at timestamp (seconds since epoch). `0` means "now" when signing.
    #[serde(default)]
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Subject, the decimal user ID.
    pub sub: String,
}
