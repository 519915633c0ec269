//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::service::{AuthService, ProductService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub product_service: Arc<dyn ProductService>,
    /// Present when backed by a database; in-memory runs have none
    pub database: Option<Database>,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        product_service: Arc<dyn ProductService>,
        database: Option<Database>,
    ) -> Self {
        Self {
            auth_service,
            product_service,
            database,
        }
    }
}
