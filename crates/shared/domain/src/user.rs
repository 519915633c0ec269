//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainResult, ValidationError};
use crate::password::Password;

/// User domain entity
#[derive(Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl User {
    /// Create a new user, hashing the plaintext password.
    ///
    /// Email uniqueness is the storage layer's job; only emptiness is
    /// checked here.
    pub fn new(name: &str, email: &str, password: &str) -> DomainResult<Self> {
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if email.is_empty() {
            return Err(ValidationError::EmailRequired);
        }

        let password_hash = Password::new(password)?.into_string();

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            created_at: Utc::now(),
        })
    }

    /// Check a candidate password against the stored hash.
    pub fn validate_password(&self, candidate: &str) -> bool {
        Password::from_hash(self.password_hash.as_str()).verify(candidate)
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new("Diego", "diegoaf@ucl.br", "Revolution22#").unwrap();

        assert!(!user.id.is_nil());
        assert!(!user.password_hash.is_empty());
        assert_eq!(user.name, "Diego");
        assert_eq!(user.email, "diegoaf@ucl.br");
    }

    #[test]
    fn test_validate_password() {
        let user = User::new("Diego", "diegoaf@ucl.br", "Revolution22#").unwrap();

        assert!(user.validate_password("Revolution22#"));
        assert!(!user.validate_password("Revolution22"));
        assert!(!user.validate_password(""));
        assert_ne!(user.password_hash, "Revolution22#");
    }

    #[test]
    fn test_debug_redacts_hash() {
        let user = User::new("Diego", "diegoaf@ucl.br", "Revolution22#").unwrap();
        let debug = format!("{:?}", user);

        assert!(debug.contains("diegoaf@ucl.br"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(&user.password_hash));
    }

    #[test]
    fn test_name_required() {
        let err = User::new("", "diegoaf@ucl.br", "Revolution22#").unwrap_err();
        assert_eq!(err, ValidationError::NameRequired);
    }

    #[test]
    fn test_email_required() {
        let err = User::new("Diego", "", "Revolution22#").unwrap_err();
        assert_eq!(err, ValidationError::EmailRequired);
    }

    #[test]
    fn test_users_get_distinct_ids() {
        let a = User::new("A", "a@example.com", "password-a").unwrap();
        let b = User::new("B", "b@example.com", "password-b").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User::new("Diego", "diegoaf@ucl.br", "Revolution22#").unwrap();

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains(&user.password_hash));

        let response = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(response.get("password_hash").is_none());
        assert_eq!(response["name"], "Diego");
    }
}
