//! Fixed basic-auth credential check.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use subtle::ConstantTimeEq;

use userhub_core::config::BasicAuthConfig;
use userhub_core::error::AppError;

/// Validates `Authorization: Basic ...` headers against one configured pair.
#[derive(Debug, Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    /// Creates an authenticator for the configured credentials.
    pub fn new(config: &BasicAuthConfig) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }

    /// Check a raw `Authorization` header value.
    ///
    /// Every failure is an authentication error carrying the basic-auth
    /// challenge.
    pub fn authenticate(&self, header: Option<&str>) -> Result<(), AppError> {
        self.check(header)
            .map_err(|reason| AppError::basic_challenge(format!("unauthorized: {reason}")))
    }

    fn check(&self, header: Option<&str>) -> Result<(), &'static str> {
        let header = header.ok_or("authorization header is missing")?;
        let encoded = match header.split(' ').collect::<Vec<_>>().as_slice() {
            ["Basic", encoded] => *encoded,
            _ => return Err("authorization header is malformed"),
        };
        let decoded = STANDARD
            .decode(encoded)
            .map_err(|_| "credentials are not valid base64")?;
        let decoded = String::from_utf8(decoded).map_err(|_| "credentials are not valid utf-8")?;

        let (user, pass) = decoded.split_once(':').ok_or("invalid credentials")?;
        if self.matches(user, pass) {
            Ok(())
        } else {
            Err("invalid credentials")
        }
    }

    /// Compares both halves of the pair without short-circuiting on the
    /// first mismatching byte or field.
    fn matches(&self, user: &str, pass: &str) -> bool {
        let user_ok = user.as_bytes().ct_eq(self.username.as_bytes());
        let pass_ok = pass.as_bytes().ct_eq(self.password.as_bytes());
        bool::from(user_ok & pass_ok)
    }
}
