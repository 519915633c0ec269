//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Entities validate themselves at construction, so an invalid `User` or
//! `Product` can never reach the storage layer.

pub mod constants;
pub mod error;
pub mod password;
pub mod product;
pub mod user;

pub use constants::*;
pub use error::{AuthError, DomainResult, ValidationError};
pub use password::Password;
pub use product::{Product, ProductResponse};
pub use user::{User, UserResponse};
