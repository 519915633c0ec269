//! In-memory repositories.
//!
//! Same contracts as the SeaORM stores, backed by process memory. Used by
//! the HTTP tests and for running the service without a database.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::sort_key::natural_sort_key;
use super::{ProductRepository, UserRepository};
use crate::types::PageRequest;
use common::{AppError, AppResult, OptionExt};
use domain::{Product, User};

struct ProductRow {
    seq: u64,
    name_key: String,
    product: Product,
}

#[derive(Default)]
struct ProductTable {
    rows: HashMap<Uuid, ProductRow>,
    next_seq: u64,
}

/// Product repository kept in memory
#[derive(Default)]
pub struct InMemoryProductStore {
    table: RwLock<ProductTable>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductStore {
    async fn create(&self, product: &Product) -> AppResult<()> {
        let mut table = self.table.write().await;
        if table.rows.contains_key(&product.id) {
            return Err(AppError::persistence(format!(
                "product {} already exists",
                product.id
            )));
        }

        table.next_seq += 1;
        let seq = table.next_seq;
        table.rows.insert(
            product.id,
            ProductRow {
                seq,
                name_key: natural_sort_key(&product.name),
                product: product.clone(),
            },
        );
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Product> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .map(|row| row.product.clone())
            .ok_or_not_found()
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<Vec<Product>> {
        let table = self.table.read().await;
        let mut rows: Vec<&ProductRow> = table.rows.values().collect();

        let desc = page.sort().is_desc();
        rows.sort_by(|a, b| {
            let by_name = a.name_key.cmp(&b.name_key);
            let by_name = if desc { by_name.reverse() } else { by_name };
            match by_name {
                Ordering::Equal => a.seq.cmp(&b.seq),
                other => other,
            }
        });

        Ok(rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|row| row.product.clone())
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.table.read().await.rows.len() as u64)
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&product.id).ok_or(AppError::NotFound)?;

        row.name_key = natural_sort_key(&product.name);
        row.product.name = product.name.clone();
        row.product.price = product.price;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_not_found()
    }
}

/// User repository kept in memory, keyed by email
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(AppError::conflict("User"));
        }

        users.insert(user.email.clone(), user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SortOrder;

    async fn seeded(count: usize) -> InMemoryProductStore {
        let store = InMemoryProductStore::new();
        for i in 1..=count {
            let product = Product::new(&format!("Product {}", i), i as f64 * 1.5).unwrap();
            store.create(&product).await.unwrap();
        }
        store
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_find_all_pages() {
        let store = seeded(24).await;

        let page1 = store
            .find_all(&PageRequest::new(1, 10, SortOrder::Asc))
            .await
            .unwrap();
        assert_eq!(page1.len(), 10);
        assert_eq!(page1[0].name, "Product 1");
        assert_eq!(page1[9].name, "Product 10");

        let page2 = store
            .find_all(&PageRequest::new(2, 10, SortOrder::Asc))
            .await
            .unwrap();
        assert_eq!(page2.len(), 10);
        assert_eq!(page2[0].name, "Product 11");
        assert_eq!(page2[9].name, "Product 20");

        let page3 = store
            .find_all(&PageRequest::new(3, 10, SortOrder::Asc))
            .await
            .unwrap();
        assert_eq!(
            names(&page3),
            vec!["Product 21", "Product 22", "Product 23", "Product 24"]
        );

        let page4 = store
            .find_all(&PageRequest::new(4, 10, SortOrder::Asc))
            .await
            .unwrap();
        assert!(page4.is_empty());
    }

    #[tokio::test]
    async fn test_find_all_desc() {
        let store = seeded(12).await;

        let page = store
            .find_all(&PageRequest::new(1, 3, SortOrder::Desc))
            .await
            .unwrap();
        assert_eq!(names(&page), vec!["Product 12", "Product 11", "Product 10"]);
    }

    #[tokio::test]
    async fn test_duplicate_names_keep_insertion_order() {
        let store = InMemoryProductStore::new();
        let first = Product::new("Lamp", 10.0).unwrap();
        let second = Product::new("Lamp", 20.0).unwrap();
        let other = Product::new("Desk", 99.0).unwrap();
        for p in [&first, &second, &other] {
            store.create(p).await.unwrap();
        }

        for sort in [SortOrder::Asc, SortOrder::Desc] {
            let all = store.find_all(&PageRequest::new(1, 10, sort)).await.unwrap();
            let lamps: Vec<Uuid> = all.iter().filter(|p| p.name == "Lamp").map(|p| p.id).collect();
            assert_eq!(lamps, vec![first.id, second.id]);
        }
    }

    #[tokio::test]
    async fn test_create_duplicate_id_rejected() {
        let store = InMemoryProductStore::new();
        let product = Product::new("Chair", 45.0).unwrap();
        store.create(&product).await.unwrap();

        let err = store.create(&product).await.unwrap_err();
        assert!(matches!(err, AppError::Persistence(_)));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let store = InMemoryProductStore::new();
        let mut product = Product::new("Chair", 45.0).unwrap();
        store.create(&product).await.unwrap();

        product.name = "Armchair".to_string();
        product.price = 120.0;
        store.update(&product).await.unwrap();
        assert_eq!(store.find_by_id(product.id).await.unwrap(), product);

        store.delete(product.id).await.unwrap();
        assert!(matches!(
            store.find_by_id(product.id).await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(store.delete(product.id).await, Err(AppError::NotFound)));
        assert!(matches!(store.update(&product).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_user_store_unique_email() {
        let store = InMemoryUserStore::new();
        let user = User::new("Diego", "diego@example.com", "Revolution22#").unwrap();
        store.create(&user).await.unwrap();

        let found = store.find_by_email("diego@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert!(store.find_by_email("nobody@example.com").await.unwrap().is_none());

        let dup = User::new("Other", "diego@example.com", "another-pass").unwrap();
        assert!(matches!(store.create(&dup).await, Err(AppError::Conflict(_))));
    }
}
