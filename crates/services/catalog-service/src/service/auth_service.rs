//! Authentication service - registration, login and token checks.
//!
//! Password hashing and verification are CPU-bound and deliberately slow,
//! so they run on the blocking pool instead of stalling the async workers.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::join_error;
use crate::auth::TokenIssuer;
use crate::repository::UserRepository;
use common::{AppError, AppResult};
use domain::{AuthError, Password, User, TOKEN_TYPE_BEARER};

/// Hash verified against when the email is unknown, so a miss costs the
/// same as a wrong password and response timing does not reveal accounts.
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    Password::new("timing-equalizer-password")
        .map(Password::into_string)
        .unwrap_or_default()
});

/// Token response returned after successful authentication
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    /// Signed access token
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Check credentials and issue a token
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Verify a token and return the user id it was issued for
    fn verify_token(&self, token: &str) -> Result<Uuid, AuthError>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenIssuer>,
    token_lifetime: Duration,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<TokenIssuer>,
        token_lifetime: Duration,
    ) -> Self {
        Self {
            users,
            tokens,
            token_lifetime,
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User> {
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        // Validation and hashing happen before any write
        let user = tokio::task::spawn_blocking(move || User::new(&name, &email, &password))
            .await
            .map_err(join_error)??;

        self.users.create(&user).await?;
        info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let user = self.users.find_by_email(&email).await?;

        let (user, password_valid) = tokio::task::spawn_blocking(move || {
            let valid = match &user {
                Some(user) => user.validate_password(&password),
                None => {
                    Password::from_hash(DUMMY_HASH.as_str()).verify(&password);
                    false
                }
            };
            (user, valid)
        })
        .await
        .map_err(join_error)?;

        let user = match user {
            Some(user) if password_valid => user,
            _ => {
                warn!("Rejected login attempt");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let access_token = self.tokens.issue(user.id, self.token_lifetime)?;
        debug!(user_id = %user.id, "Token issued");

        Ok(TokenResponse {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.token_lifetime.num_seconds(),
        })
    }

    fn verify_token(&self, token: &str) -> Result<Uuid, AuthError> {
        self.tokens.verify(token)
    }
}
