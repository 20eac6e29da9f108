//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use userhub_core::error::AppError;
use userhub_service::NewAccount;

/// Registration fields in report order. The full name may be keyed by its
/// wire name or its field name depending on how the validator derives it.
const REGISTER_FIELDS: &[&str] = &["email", "password", "username", "full_name", "fullname"];

/// Registration request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    /// Email address, stored lower-cased.
    #[validate(
        length(min = 1, code = "required", message = "email is required"),
        email(message = "invalid email format")
    )]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    /// Display handle.
    #[validate(length(min = 1, code = "required", message = "username is required"))]
    pub username: String,
    /// Full name.
    #[serde(rename = "fullname")]
    #[validate(length(min = 1, code = "required", message = "fullname is required"))]
    pub full_name: String,
}

impl RegisterRequest {
    /// Trim and lower-case the email, trim username and password.
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();
        self.username = self.username.trim().to_string();
        self.password = self.password.trim().to_string();
        self
    }

    /// Normalize, validate and convert into service input.
    pub fn into_account(self) -> Result<NewAccount, AppError> {
        let req = self.normalize();
        req.validate().map_err(|e| validation_error(&e, REGISTER_FIELDS))?;

        Ok(NewAccount {
            email: req.email,
            password: req.password,
            username: req.username,
            full_name: req.full_name,
        })
    }
}

/// Login request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    /// Email address.
    #[validate(
        length(min = 1, code = "required", message = "email is required"),
        email(message = "invalid email format")
    )]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, code = "required", message = "password is required"))]
    pub password: String,
}

impl LoginRequest {
    /// Normalize and validate the credentials.
    pub fn into_credentials(mut self) -> Result<(String, String), AppError> {
        self.email = self.email.trim().to_lowercase();
        self.password = self.password.trim().to_string();
        self.validate()
            .map_err(|e| validation_error(&e, &["email", "password"]))?;
        Ok((self.email, self.password))
    }
}

/// Join one message per failing field, in declaration order.
///
/// A field failing several rules reports the `required` rule first.
fn validation_error(errors: &ValidationErrors, field_order: &[&str]) -> AppError {
    let by_field = errors.field_errors();
    let messages: Vec<String> = field_order
        .iter()
        .filter_map(|field| by_field.get(*field))
        .filter_map(|errs| {
            errs.iter()
                .find(|e| e.code == "required")
                .or_else(|| errs.first())
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid {}", e.code))
                })
        })
        .collect();

    AppError::validation(messages.join(", "))
}
