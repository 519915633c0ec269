//! Catalog Service Library
//!
//! HTTP API for user registration, token issuance and a product catalog.
//! Storage is SeaORM (Postgres or SQLite); the in-memory repositories give
//! the same behavior without a database.

pub mod auth;
pub mod config;
pub mod http;
pub mod infra;
pub mod repository;
pub mod service;
pub mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::auth::TokenIssuer;
use crate::config::CatalogConfig;
use crate::http::{create_router, AppState};
use crate::infra::Database;
use crate::repository::{ProductRepository, ProductStore, UserRepository, UserStore};
use crate::service::{Authenticator, ProductManager};

/// Wire repositories into services and build the shared handler state.
pub fn build_state(
    config: &CatalogConfig,
    users: Arc<dyn UserRepository>,
    products: Arc<dyn ProductRepository>,
    database: Option<Database>,
) -> AppState {
    let issuer = Arc::new(TokenIssuer::new(config.jwt_secret_bytes()));
    let auth_service = Arc::new(Authenticator::new(users, issuer, config.token_lifetime()));
    let product_service = Arc::new(ProductManager::new(products));

    AppState::new(auth_service, product_service, database)
}

/// Connect to the configured database and serve HTTP until shutdown.
pub async fn run_server(config: CatalogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(config.database_url.as_str()).await?;
    let db_conn = db.get_connection();

    let users = Arc::new(UserStore::new(db_conn.clone()));
    let products = Arc::new(ProductStore::new(db_conn));
    let state = build_state(&config, users, products, Some(db));

    let app = create_router(state);

    let addr: SocketAddr = config.server_addr().parse()?;
    info!("Catalog service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &CatalogConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(config.database_url.as_str()).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
