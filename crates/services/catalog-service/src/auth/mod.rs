//! Token issuance and verification.

mod token;

pub use token::{Claims, TokenIssuer};
