//! HTTP surface: routes, handlers, middleware and extractors.

pub mod extractors;
pub mod handlers;
pub mod middleware;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
