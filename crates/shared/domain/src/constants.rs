//! Domain-level constants.
//!
//! These constants define business rules and the documented defaults the
//! rest of the workspace normalizes to.

// =============================================================================
// Pagination
// =============================================================================

/// Page used when the caller asks for a non-positive page (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Page size used when the caller asks for a non-positive limit
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Maximum allowed items per page to prevent unbounded queries
pub const MAX_PAGE_SIZE: u64 = 100;

/// Sort keyword selecting descending order; anything else sorts ascending
pub const SORT_DESC: &str = "desc";

// =============================================================================
// Authentication
// =============================================================================

/// Default token lifetime in seconds
pub const DEFAULT_JWT_EXPIRES_IN_SECONDS: i64 = 3600;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";
