//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Placeholder token secret shipped in the default configuration.
const PLACEHOLDER_TOKEN_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";
/// Placeholder basic-auth username and password.
const PLACEHOLDER_BASIC_CREDENTIAL: &str = "admin";

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Bearer token settings.
    #[serde(default)]
    pub token: TokenConfig,
    /// Fixed basic-auth credential pair.
    #[serde(default)]
    pub basic: BasicAuthConfig,
    /// Role assigned to newly registered users.
    #[serde(default = "default_role_id")]
    pub default_role_id: i32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: TokenConfig::default(),
            basic: BasicAuthConfig::default(),
            default_role_id: default_role_id(),
        }
    }
}

/// Signed bearer token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_secret")]
    pub secret: String,
    /// Token lifetime in seconds.
    #[serde(default = "default_expiry")]
    pub expiry_seconds: u64,
    /// `iss` claim written into issued tokens.
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// `aud` claim written into issued tokens.
    #[serde(default = "default_issuer")]
    pub audience: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            expiry_seconds: default_expiry(),
            issuer: default_issuer(),
            audience: default_issuer(),
        }
    }
}

/// Basic-auth credential pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicAuthConfig {
    /// Expected username.
    #[serde(default = "default_basic_user")]
    pub username: String,
    /// Expected password.
    #[serde(default = "default_basic_pass")]
    pub password: String,
}

impl Default for BasicAuthConfig {
    fn default() -> Self {
        Self {
            username: default_basic_user(),
            password: default_basic_pass(),
        }
    }
}

fn default_secret() -> String {
    PLACEHOLDER_TOKEN_SECRET.to_string()
}

fn default_expiry() -> u64 {
    3 * 24 * 60 * 60
}

fn default_issuer() -> String {
    "userhub".to_string()
}

fn default_basic_user() -> String {
    PLACEHOLDER_BASIC_CREDENTIAL.to_string()
}

fn default_basic_pass() -> String {
    PLACEHOLDER_BASIC_CREDENTIAL.to_string()
}

fn default_role_id() -> i32 {
    2
}

impl AuthConfig {
    /// Names of the credentials still set to their shipped placeholders.
    pub fn placeholder_credentials(&self) -> Vec<&'static str> {
        let mut found = Vec::new();
        if self.token.secret == PLACEHOLDER_TOKEN_SECRET {
            found.push("auth.token.secret");
        }
        if self.basic.username == PLACEHOLDER_BASIC_CREDENTIAL
            && self.basic.password == PLACEHOLDER_BASIC_CREDENTIAL
        {
            found.push("auth.basic");
        }
        found
    }
}
