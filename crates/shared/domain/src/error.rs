//! Domain-level errors.
//!
//! Closed enumerations, one per concern, so callers match on the kind of
//! failure instead of comparing messages. They are independent of HTTP and
//! database concerns.

use thiserror::Error;

/// Entity construction and re-validation failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("id is required")]
    IdRequired,

    #[error("name is required")]
    NameRequired,

    #[error("email is required")]
    EmailRequired,

    #[error("price is required")]
    PriceRequired,

    #[error("invalid price")]
    InvalidPrice,

    #[error("password could not be hashed")]
    PasswordHashFailure,
}

/// Authentication failures: bad credentials or an unusable token.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Malformed token")]
    Malformed,
}

/// Result type alias for entity construction
pub type DomainResult<T> = Result<T, ValidationError>;
