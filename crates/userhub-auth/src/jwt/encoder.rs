//! JWT token creation.

use jsonwebtoken::{EncodingKey, Header, encode};

use super::claims::Claims;
use super::error::TokenError;

/// Signs claims with HMAC-SHA256.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").finish_non_exhaustive()
    }
}

impl JwtEncoder {
    /// Creates an encoder for the shared secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign `claims`, stamping `iat` with `now` when it is unset.
    ///
    /// Rejects claims whose expiry is not after their issue time or whose
    /// subject is empty.
    pub fn encode(&self, mut claims: Claims, now: i64) -> Result<String, TokenError> {
        if claims.iat == 0 {
            claims.iat = now;
        }
        if claims.sub.trim().is_empty() {
            return Err(TokenError::Signing("subject is empty".into()));
        }
        if claims.exp <= claims.iat {
            return Err(TokenError::Signing(
                "expiry must be after issue time".into(),
            ));
        }

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }
}
