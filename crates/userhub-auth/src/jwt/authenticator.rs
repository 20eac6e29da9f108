//! Token authenticator: issues and validates bearer tokens.

use chrono::Utc;

use userhub_core::config::TokenConfig;

use super::claims::Claims;
use super::decoder::JwtDecoder;
use super::encoder::JwtEncoder;
use super::error::TokenError;

/// Issues and validates signed, expiring bearer tokens.
///
/// Holds the secret, issuer, audience and lifetime configured at startup.
#[derive(Debug, Clone)]
pub struct TokenAuthenticator {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    issuer: String,
    audience: String,
    expiry_seconds: i64,
}

impl TokenAuthenticator {
    /// Creates an authenticator from token configuration.
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoder: JwtEncoder::new(&config.secret),
            decoder: JwtDecoder::new(&config.secret),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            expiry_seconds: i64::try_from(config.expiry_seconds).unwrap_or(i64::MAX),
        }
    }

    /// Sign arbitrary claims; `iat` defaults to now.
    pub fn generate_token(&self, claims: Claims) -> Result<String, TokenError> {
        self.encoder.encode(claims, Utc::now().timestamp())
    }

    /// Verify a token and return its claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.decoder.decode(token)
    }

    /// Issue a token for a user with the configured issuer, audience and
    /// lifetime.
    pub fn issue_for(&self, user_id: i64, role_id: i32) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            user_id,
            role_id,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now,
            exp: now.saturating_add(self.expiry_seconds),
            sub: user_id.to_string(),
        };
        self.encoder.encode(claims, now)
    }
}
