//! Application services - use cases the HTTP handlers call.
//!
//! Services orchestrate domain validation and repositories. They depend on
//! repository traits, never on a concrete store.

mod auth_service;
mod product_service;

pub use auth_service::{AuthService, Authenticator, TokenResponse};
pub use product_service::{ProductManager, ProductService};

use common::AppError;

/// Map a failed blocking task (panic or cancellation) to an internal error
pub(crate) fn join_error(err: tokio::task::JoinError) -> AppError {
    AppError::internal(format!("Blocking task failed: {}", err))
}
