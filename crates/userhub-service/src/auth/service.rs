//! Account registration and credential login.

use std::sync::Arc;

use tracing::{info, warn};

use userhub_auth::identity::IdentityResolver;
use userhub_auth::jwt::TokenAuthenticator;
use userhub_auth::password::PasswordHasher;
use userhub_core::error::AppError;
use userhub_database::store::UserStore;
use userhub_entity::user::{CreateUser, User};

/// Already-normalized, validated registration data.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Trimmed, lower-cased email.
    pub email: String,
    /// Trimmed plaintext password.
    pub password: String,
    /// Trimmed username.
    pub username: String,
    /// Full name.
    pub full_name: String,
}

/// Handles registration and login.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    tokens: Arc<TokenAuthenticator>,
    identity: IdentityResolver,
    default_role_id: i32,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        tokens: Arc<TokenAuthenticator>,
        identity: IdentityResolver,
        default_role_id: i32,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
            identity,
            default_role_id,
        }
    }

    /// Register a new account with the default role.
    ///
    /// An already-registered email is a validation error; losing an insert
    /// race to a concurrent registration surfaces as a conflict.
    pub async fn register(&self, account: NewAccount) -> Result<User, AppError> {
        if self.users.get_user_by_email(&account.email).await?.is_some() {
            return Err(AppError::validation("email already exists"));
        }

        let password_hash = self.hasher.hash(&account.password)?;
        let user = self
            .users
            .create_user(&CreateUser {
                email: account.email,
                username: account.username,
                full_name: account.full_name,
                password_hash,
                role_id: self.default_role_id,
            })
            .await?;

        // A stale cached copy must not outlive a write.
        self.identity.invalidate(user.id).await?;

        info!(user_id = user.id, role_id = user.role_id, "User registered");
        Ok(user)
    }

    /// Verify credentials and issue a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let email = email.trim().to_lowercase();
        let Some(user) = self.users.get_user_by_email(&email).await? else {
            return Err(invalid_credentials());
        };

        if !self.hasher.verify(&user.password_hash, password) {
            warn!(user_id = user.id, "Password mismatch on login");
            return Err(invalid_credentials());
        }

        let token = self.tokens.issue_for(user.id, user.role_id)?;
        info!(user_id = user.id, "User logged in");
        Ok(token)
    }
}

fn invalid_credentials() -> AppError {
    AppError::authentication("invalid email or password")
}

#[cfg(test)]
mod tests {
    use userhub_core::config::TokenConfig;
    use userhub_core::error::ErrorKind;
    use userhub_database::MemoryStore;

    use super::*;

    fn service(store: Arc<MemoryStore>) -> (AuthService, Arc<TokenAuthenticator>) {
        let tokens = Arc::new(TokenAuthenticator::new(&TokenConfig {
            secret: "svc-secret".into(),
            expiry_seconds: 600,
            ..TokenConfig::default()
        }));
        let service = AuthService::new(
            store.clone(),
            Arc::new(PasswordHasher::with_params(1024, 1, 1).unwrap()),
            tokens.clone(),
            IdentityResolver::new(store, None),
            2,
        );
        (service, tokens)
    }

    fn account(email: &str) -> NewAccount {
        NewAccount {
            email: email.into(),
            password: "password1".into(),
            username: "a".into(),
            full_name: "A B".into(),
        }
    }

    #[tokio::test]
    async fn test_register_assigns_default_role_and_hashes() {
        let (service, _) = service(Arc::new(MemoryStore::new()));
        let user = service.register(account("a@b.com")).await.unwrap();
        assert_eq!(user.role_id, 2);
        assert_ne!(user.password_hash, "password1");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_validation_error() {
        let (service, _) = service(Arc::new(MemoryStore::new()));
        service.register(account("a@b.com")).await.unwrap();
        let err = service.register(account("a@b.com")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "email already exists");
    }

    #[tokio::test]
    async fn test_login_issues_token_for_user() {
        let (service, tokens) = service(Arc::new(MemoryStore::new()));
        let user = service.register(account("a@b.com")).await.unwrap();

        let token = service.login(" A@B.com ", "password1").await.unwrap();
        let claims = tokens.validate_token(&token).unwrap();
        assert_eq!(claims.user_id, user.id);
        assert_eq!(claims.exp - claims.iat, 600);
    }

    #[tokio::test]
    async fn test_bad_credentials_are_indistinguishable() {
        let (service, _) = service(Arc::new(MemoryStore::new()));
        service.register(account("a@b.com")).await.unwrap();

        let wrong_password = service.login("a@b.com", "password2").await.unwrap_err();
        let unknown_email = service.login("x@b.com", "password1").await.unwrap_err();
        assert_eq!(wrong_password.kind, ErrorKind::Authentication);
        assert_eq!(wrong_password.message, unknown_email.message);
    }
}
