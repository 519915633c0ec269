//! Product handlers. Every route here sits behind the auth middleware.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::ProductResponse;

use crate::http::extractors::ValidatedJson;
use crate::http::AppState;
use crate::types::{PageRequest, Paginated, PaginationParams};

/// Create or replace request; name and price rules live on `Product`
#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: String,
    pub price: f64,
}

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Create a product
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let product = state
        .product_service
        .create_product(payload.name, payload.price)
        .await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// List products, one page at a time
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Paginated<ProductResponse>>> {
    let page = state
        .product_service
        .list_products(PageRequest::from(params))
        .await?;

    Ok(Json(page.map(ProductResponse::from)))
}

/// Get product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProductResponse>> {
    let product = state.product_service.get_product(id).await?;
    Ok(Json(ProductResponse::from(product)))
}

/// Replace name and price of a product
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<ProductRequest>,
) -> AppResult<Json<ProductResponse>> {
    let product = state
        .product_service
        .update_product(id, payload.name, payload.price)
        .await?;

    Ok(Json(ProductResponse::from(product)))
}

/// Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.product_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
