//! HTTP request handlers.

mod health_handler;
mod product_handler;
mod user_handler;

pub use health_handler::health_check;
pub use product_handler::product_routes;
pub use user_handler::user_routes;
