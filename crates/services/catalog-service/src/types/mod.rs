//! Shared types for list endpoints.

mod pagination;

pub use pagination::{PageRequest, Paginated, PaginationMeta, PaginationParams, SortOrder};
