//! SeaORM repository tests against in-memory SQLite.

use sea_orm::ConnectOptions;

use catalog_service_lib::infra::Database;
use catalog_service_lib::repository::{ProductRepository, ProductStore, UserRepository, UserStore};
use catalog_service_lib::types::{PageRequest, SortOrder};
use common::AppError;
use domain::{Product, User};

// =============================================================================
// Helpers
// =============================================================================

/// Fresh migrated database. One pooled connection, so every query sees the
/// same in-memory SQLite database.
async fn database() -> Database {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    Database::connect(options).await.unwrap()
}

async fn seeded_products(count: usize) -> ProductStore {
    let store = ProductStore::new(database().await.get_connection());
    for i in 1..=count {
        let product = Product::new(&format!("Product {}", i), i as f64 * 1.5).unwrap();
        store.create(&product).await.unwrap();
    }
    store
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn test_create_and_find() {
    let store = ProductStore::new(database().await.get_connection());
    let product = Product::new("Chair", 45.5).unwrap();
    store.create(&product).await.unwrap();

    let found = store.find_by_id(product.id).await.unwrap();
    assert_eq!(found.id, product.id);
    assert_eq!(found.name, "Chair");
    assert_eq!(found.price, 45.5);
}

#[tokio::test]
async fn test_create_duplicate_id_fails() {
    let store = ProductStore::new(database().await.get_connection());
    let product = Product::new("Chair", 45.5).unwrap();
    store.create(&product).await.unwrap();

    assert!(store.create(&product).await.is_err());
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_find_all_pages() {
    let store = seeded_products(24).await;

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

    let past_end = store
        .find_all(&PageRequest::new(9, 10, SortOrder::Asc))
        .await
        .unwrap();
    assert!(past_end.is_empty());
    assert_eq!(store.count().await.unwrap(), 24);
}

#[tokio::test]
async fn test_find_all_huge_page_is_empty() {
    let store = seeded_products(3).await;

    for page in [i64::MAX, 92_233_720_368_547_760] {
        let products = store
            .find_all(&PageRequest::new(page, 100, SortOrder::Asc))
            .await
            .unwrap();
        assert!(products.is_empty());
    }
}

#[tokio::test]
async fn test_find_all_desc() {
    let store = seeded_products(12).await;

    let page = store
        .find_all(&PageRequest::new(1, 3, SortOrder::Desc))
        .await
        .unwrap();
    assert_eq!(names(&page), vec!["Product 12", "Product 11", "Product 10"]);
}

#[tokio::test]
async fn test_duplicate_names_keep_insertion_order() {
    let store = ProductStore::new(database().await.get_connection());
    let first = Product::new("Lamp", 10.0).unwrap();
    let second = Product::new("Lamp", 20.0).unwrap();
    store.create(&first).await.unwrap();
    store.create(&second).await.unwrap();

    for sort in [SortOrder::Asc, SortOrder::Desc] {
        let all = store.find_all(&PageRequest::new(1, 10, sort)).await.unwrap();
        let ids: Vec<_> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }
}

#[tokio::test]
async fn test_update_is_idempotent() {
    let store = ProductStore::new(database().await.get_connection());
    let mut product = Product::new("Chair", 45.0).unwrap();
    store.create(&product).await.unwrap();

    product.name = "Armchair".to_string();
    product.price = 120.0;
    store.update(&product).await.unwrap();
    let after_first = store.find_by_id(product.id).await.unwrap();
    store.update(&product).await.unwrap();
    let after_second = store.find_by_id(product.id).await.unwrap();

    assert_eq!(after_first, after_second);
    assert_eq!(after_second.name, "Armchair");
    assert_eq!(after_second.price, 120.0);
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_reorders_by_new_name() {
    let store = seeded_products(3).await;
    let mut first = store
        .find_all(&PageRequest::new(1, 1, SortOrder::Asc))
        .await
        .unwrap()
        .remove(0);

    first.name = "Product 99".to_string();
    store.update(&first).await.unwrap();

    let all = store
        .find_all(&PageRequest::new(1, 10, SortOrder::Asc))
        .await
        .unwrap();
    assert_eq!(names(&all), vec!["Product 2", "Product 3", "Product 99"]);
}

#[tokio::test]
async fn test_missing_ids_not_found() {
    let store = ProductStore::new(database().await.get_connection());
    let ghost = Product::new("Ghost", 1.0).unwrap();

    assert!(matches!(store.find_by_id(ghost.id).await, Err(AppError::NotFound)));
    assert!(matches!(store.update(&ghost).await, Err(AppError::NotFound)));
    assert!(matches!(store.delete(ghost.id).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_delete_then_find() {
    let store = ProductStore::new(database().await.get_connection());
    let product = Product::new("Chair", 45.0).unwrap();
    store.create(&product).await.unwrap();

    store.delete(product.id).await.unwrap();
    assert!(matches!(store.find_by_id(product.id).await, Err(AppError::NotFound)));
    assert_eq!(store.count().await.unwrap(), 0);
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_user_create_and_find_by_email() {
    let store = UserStore::new(database().await.get_connection());
    let user = User::new("Diego", "diego@example.com", "Revolution22#").unwrap();
    store.create(&user).await.unwrap();

    let found = store.find_by_email("diego@example.com").await.unwrap().unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.password_hash, user.password_hash);
    assert!(found.validate_password("Revolution22#"));

    assert!(store.find_by_email("nobody@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_user_duplicate_email_conflicts() {
    let store = UserStore::new(database().await.get_connection());
    let user = User::new("Diego", "diego@example.com", "Revolution22#").unwrap();
    store.create(&user).await.unwrap();

    let dup = User::new("Other", "diego@example.com", "another-pass").unwrap();
    assert!(matches!(store.create(&dup).await, Err(AppError::Conflict(_))));
}

// =============================================================================
// Database
// =============================================================================

#[tokio::test]
async fn test_ping_and_migration_status() {
    let db = database().await;
    db.ping().await.unwrap();

    let status = db.migration_status().await.unwrap();
    assert_eq!(status.len(), 2);
    assert!(status.iter().all(|(_, applied)| *applied));
}
