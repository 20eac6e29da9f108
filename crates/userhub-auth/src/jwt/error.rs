//! Token failure taxonomy.

use thiserror::Error;

use userhub_core::error::{AppError, ErrorKind};

/// Why a token could not be issued or accepted.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Claims were malformed or encoding failed.
    #[error("failed to sign token: {0}")]
    Signing(String),
    /// The signature does not verify under the server secret.
    #[error("token signature is invalid")]
    InvalidSignature,
    /// `exp` is in the past.
    #[error("token has expired")]
    Expired,
    /// The token could not be parsed.
    #[error("token is malformed")]
    Malformed,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(_) => {
                AppError::with_source(ErrorKind::Internal, "failed to issue token", err)
            }
            _ => AppError::authentication(format!("unauthorized: {err}")),
        }
    }
}
