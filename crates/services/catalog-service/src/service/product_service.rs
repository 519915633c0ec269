//! Product service - business logic for the product catalog.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::repository::ProductRepository;
use crate::types::{PageRequest, Paginated};
use common::AppResult;
use domain::Product;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Validate and store a new product
    async fn create_product(&self, name: String, price: f64) -> AppResult<Product>;

    /// Get product by ID
    async fn get_product(&self, id: Uuid) -> AppResult<Product>;

    /// List products with pagination
    async fn list_products(&self, page: PageRequest) -> AppResult<Paginated<Product>>;

    /// Replace name and price of an existing product
    async fn update_product(&self, id: Uuid, name: String, price: f64) -> AppResult<Product>;

    /// Delete product by ID
    async fn delete_product(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ProductService.
pub struct ProductManager {
    repo: Arc<dyn ProductRepository>,
}

impl ProductManager {
    /// Create new product service instance
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn create_product(&self, name: String, price: f64) -> AppResult<Product> {
        let product = Product::new(&name, price)?;
        self.repo.create(&product).await?;

        info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    async fn get_product(&self, id: Uuid) -> AppResult<Product> {
        self.repo.find_by_id(id).await
    }

    async fn list_products(&self, page: PageRequest) -> AppResult<Paginated<Product>> {
        let products = self.repo.find_all(&page).await?;
        let total = self.repo.count().await?;

        Ok(Paginated::new(products, &page, total))
    }

    async fn update_product(&self, id: Uuid, name: String, price: f64) -> AppResult<Product> {
        let mut product = self.repo.find_by_id(id).await?;
        product.name = name;
        product.price = price;
        product.validate()?;

        self.repo.update(&product).await?;
        info!(product_id = %id, "Product updated");

        Ok(product)
    }

    async fn delete_product(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await?;
        info!(product_id = %id, "Product deleted");

        Ok(())
    }
}
