//! Common utilities shared across the workspace.
//!
//! This crate provides the unified application error, its HTTP mapping,
//! and the `AppResult` alias every service layer returns.

pub mod error;

pub use error::{AppError, AppResult, OptionExt};
