//! Repository layer for data access.
//!
//! Each repository is a trait so any backend honouring the contract is
//! substitutable: SeaORM stores for Postgres/SQLite, in-memory stores for
//! tests and local runs.

pub mod entities;
mod memory;
mod product_repository;
mod sort_key;
mod user_repository;

pub use memory::{InMemoryProductStore, InMemoryUserStore};
pub use product_repository::{ProductRepository, ProductStore};
pub use sort_key::natural_sort_key;
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
