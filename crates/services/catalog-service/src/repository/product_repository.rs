//! Product repository.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use super::sort_key::natural_sort_key;
use crate::types::PageRequest;
use common::{AppError, AppResult, OptionExt};
use domain::Product;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
///
/// Single-record operations are atomic in the backing store; the repository
/// itself holds no lock. A missing id is reported as `AppError::NotFound` by
/// `find_by_id`, `update` and `delete`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product. Fails if the id is already stored.
    async fn create(&self, product: &Product) -> AppResult<()>;

    /// Find product by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Product>;

    /// One page of products ordered by name (natural order), ties in
    /// insertion order
    async fn find_all(&self, page: &PageRequest) -> AppResult<Vec<Product>>;

    /// Count all products
    async fn count(&self) -> AppResult<u64>;

    /// Replace name and price of the product with the same id
    async fn update(&self, product: &Product) -> AppResult<()>;

    /// Delete product by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed product repository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn create(&self, product: &Product) -> AppResult<()> {
        let active_model = ActiveModel {
            seq: NotSet,
            id: Set(product.id),
            name: Set(product.name.clone()),
            name_key: Set(natural_sort_key(&product.name)),
            price: Set(product.price),
            created_at: Set(product.created_at),
        };

        ProductEntity::insert(active_model).exec(&self.db).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Product> {
        ProductEntity::find()
            .filter(product::Column::Id.eq(id))
            .one(&self.db)
            .await?
            .map(Product::from)
            .ok_or_not_found()
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<Vec<Product>> {
        let query = ProductEntity::find();
        let query = if page.sort().is_desc() {
            query.order_by_desc(product::Column::NameKey)
        } else {
            query.order_by_asc(product::Column::NameKey)
        };

        let models = query
            .order_by_asc(product::Column::Seq)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(ProductEntity::find().count(&self.db).await?)
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        // Single statement, so the match and the write are atomic
        let result = ProductEntity::update_many()
            .col_expr(product::Column::Name, Expr::value(product.name.clone()))
            .col_expr(
                product::Column::NameKey,
                Expr::value(natural_sort_key(&product.name)),
            )
            .col_expr(product::Column::Price, Expr::value(product.price))
            .filter(product::Column::Id.eq(product.id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ProductEntity::delete_many()
            .filter(product::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
