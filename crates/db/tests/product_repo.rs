//! Integration tests for `ProductRepo` against a real SQLite file.

use storefront_core::product::{merge, ProductDraft, ProductForm};
use storefront_db::models::product::Product;
use storefront_db::repositories::ProductRepo;
use storefront_db::{ensure_schema, Database, DbConnection};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn fresh_store() -> (TempDir, DbConnection) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = Database::new(dir.path().join("store.db"));
    let mut conn = db.connect().await.unwrap();
    ensure_schema(&mut conn).await.unwrap();
    (dir, conn)
}

fn draft(name: &str, brand: &str, price: f64) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        brand: brand.to_string(),
        category: brand.to_string(),
        description: format!("{name} description"),
        price,
        image_url: None,
    }
}

async fn insert(conn: &mut DbConnection, name: &str, brand: &str, price: f64) -> Product {
    ProductRepo::create(conn, &draft(name, brand, price))
        .await
        .unwrap()
}

fn ids(products: &[Product]) -> Vec<i64> {
    products.iter().map(|p| p.id).collect()
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_find_returns_submitted_fields() {
    let (_dir, mut conn) = fresh_store().await;

    let form = ProductForm {
        name: Some("  Test  ".to_string()),
        brand: Some("Dell".to_string()),
        price: Some("".to_string()),
        ..Default::default()
    };
    let created = ProductRepo::create(&mut conn, &form.into_new_draft().unwrap())
        .await
        .unwrap();

    let found = ProductRepo::find_by_id(&mut conn, created.id)
        .await
        .unwrap()
        .expect("row exists");
    assert_eq!(found, created);
    assert_eq!(found.name, "Test");
    assert_eq!(found.brand, "Dell");
    assert_eq!(found.price, 0.0);
    assert_eq!(found.image_url, None);
}

#[tokio::test]
async fn ids_are_assigned_increasing() {
    let (_dir, mut conn) = fresh_store().await;
    let a = insert(&mut conn, "A", "Asus", 1.0).await;
    let b = insert(&mut conn, "B", "Asus", 2.0).await;
    assert!(b.id > a.id);
}

#[tokio::test]
async fn find_missing_returns_none() {
    let (_dir, mut conn) = fresh_store().await;
    assert!(ProductRepo::find_by_id(&mut conn, 99999).await.unwrap().is_none());
}

#[tokio::test]
async fn list_latest_is_newest_first_and_capped() {
    let (_dir, mut conn) = fresh_store().await;
    let mut created = Vec::new();
    for i in 0..5 {
        created.push(insert(&mut conn, &format!("P{i}"), "Asus", 10.0).await.id);
    }

    let latest = ProductRepo::list_latest(&mut conn, 3).await.unwrap();
    assert_eq!(ids(&latest), vec![created[4], created[3], created[2]]);
}

#[tokio::test]
async fn hero_images_follow_latest_order() {
    let (_dir, mut conn) = fresh_store().await;
    insert(&mut conn, "Old", "Asus", 1.0).await;
    insert(&mut conn, "New", "Asus", 1.0).await;

    let heroes = ProductRepo::list_hero_images(&mut conn, 10).await.unwrap();
    let names: Vec<_> = heroes.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["New", "Old"]);
}

#[tokio::test]
async fn list_top_priced_orders_by_price() {
    let (_dir, mut conn) = fresh_store().await;
    insert(&mut conn, "Cheap", "Asus", 10.0).await;
    insert(&mut conn, "Pricey", "Asus", 900.0).await;
    insert(&mut conn, "Mid", "Dell", 300.0).await;

    let top = ProductRepo::list_top_priced(&mut conn, 2).await.unwrap();
    let names: Vec<_> = top.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Pricey", "Mid"]);
}

#[tokio::test]
async fn list_by_brand_is_exact_and_newest_first() {
    let (_dir, mut conn) = fresh_store().await;
    let d1 = insert(&mut conn, "D1", "Dell", 1.0).await;
    insert(&mut conn, "A1", "Asus", 1.0).await;
    let d2 = insert(&mut conn, "D2", "Dell", 1.0).await;
    insert(&mut conn, "d3", "dell", 1.0).await;
    insert(&mut conn, "D4", "Dell XPS", 1.0).await;

    let dell = ProductRepo::list_by_brand(&mut conn, "Dell").await.unwrap();
    assert_eq!(ids(&dell), vec![d2.id, d1.id]);
    assert!(dell.iter().all(|p| p.brand == "Dell"));
}

#[tokio::test]
async fn list_related_excludes_self_and_other_brands() {
    let (_dir, mut conn) = fresh_store().await;
    let target = insert(&mut conn, "D1", "Dell", 1.0).await;
    for i in 0..8 {
        insert(&mut conn, &format!("D{}", i + 2), "Dell", 1.0).await;
    }
    insert(&mut conn, "A1", "Asus", 1.0).await;

    let related = ProductRepo::list_related(&mut conn, "Dell", target.id, 6)
        .await
        .unwrap();
    assert_eq!(related.len(), 6);
    assert!(related.iter().all(|p| p.brand == "Dell" && p.id != target.id));
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_matches_name_or_brand_case_insensitively() {
    let (_dir, mut conn) = fresh_store().await;
    let by_name = insert(&mut conn, "Dell Model 3", "Dell", 1.0).await;
    let by_brand = insert(&mut conn, "Something", "model 30 series", 1.0).await;
    insert(&mut conn, "Asus Model 4", "Asus", 1.0).await;

    let hits = ProductRepo::search(&mut conn, "Model 3").await.unwrap();
    assert_eq!(ids(&hits), vec![by_brand.id, by_name.id]);

    let lower = ProductRepo::search(&mut conn, "model 3").await.unwrap();
    assert_eq!(ids(&lower), ids(&hits));
}

#[tokio::test]
async fn blank_search_returns_everything() {
    let (_dir, mut conn) = fresh_store().await;
    insert(&mut conn, "A", "Asus", 1.0).await;
    insert(&mut conn, "B", "Dell", 1.0).await;

    let all = ProductRepo::search(&mut conn, "").await.unwrap();
    let blank = ProductRepo::search(&mut conn, "   ").await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(ids(&all), ids(&blank));
    assert!(all[0].id > all[1].id);
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
    let (_dir, mut conn) = fresh_store().await;
    let sale = insert(&mut conn, "50% off", "Asus", 1.0).await;
    insert(&mut conn, "500 series", "Asus", 1.0).await;

    let hits = ProductRepo::search(&mut conn, "50%").await.unwrap();
    assert_eq!(ids(&hits), vec![sale.id]);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_with_empty_form_preserves_row() {
    let (_dir, mut conn) = fresh_store().await;
    let mut input = draft("Keep Me", "Asus", 123.45);
    input.image_url = Some("https://img/keep.png".to_string());
    let original = ProductRepo::create(&mut conn, &input).await.unwrap();

    let merged = merge(&original.to_draft(), &ProductForm::default()).unwrap();
    let updated = ProductRepo::update(&mut conn, original.id, &merged)
        .await
        .unwrap()
        .expect("row exists");

    assert_eq!(updated, original);
}

#[tokio::test]
async fn update_with_invalid_price_keeps_price() {
    let (_dir, mut conn) = fresh_store().await;
    let original = insert(&mut conn, "Priced", "Asus", 499.0).await;

    let form = ProductForm {
        price: Some("abc".to_string()),
        ..Default::default()
    };
    let merged = merge(&original.to_draft(), &form).unwrap();
    ProductRepo::update(&mut conn, original.id, &merged)
        .await
        .unwrap();

    let stored = ProductRepo::find_by_id(&mut conn, original.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.price, 499.0);
}

#[tokio::test]
async fn update_missing_returns_none() {
    let (_dir, mut conn) = fresh_store().await;
    let result = ProductRepo::update(&mut conn, 42, &draft("X", "Asus", 1.0))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn delete_removes_row() {
    let (_dir, mut conn) = fresh_store().await;
    let product = insert(&mut conn, "Gone", "Asus", 1.0).await;

    assert!(ProductRepo::delete(&mut conn, product.id).await.unwrap());
    assert!(ProductRepo::find_by_id(&mut conn, product.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_is_silent() {
    let (_dir, mut conn) = fresh_store().await;
    insert(&mut conn, "Stay", "Asus", 1.0).await;

    assert!(!ProductRepo::delete(&mut conn, 99999).await.unwrap());
    assert_eq!(ProductRepo::count(&mut conn).await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_stats_on_empty_table() {
    let (_dir, mut conn) = fresh_store().await;
    let stats = ProductRepo::dashboard_stats(&mut conn).await.unwrap();

    assert_eq!(stats.total, 0);
    assert_eq!(stats.max_price, 0.0);
    assert_eq!(stats.avg_price, 0.0);
    assert!(stats.by_category.is_empty());
    assert!(stats.recent.is_empty());
}

#[tokio::test]
async fn dashboard_stats_aggregates() {
    let (_dir, mut conn) = fresh_store().await;
    insert(&mut conn, "A1", "Asus", 100.0).await;
    insert(&mut conn, "A2", "Asus", 300.0).await;
    for i in 0..5 {
        insert(&mut conn, &format!("D{i}"), "Dell", 200.0).await;
    }

    let stats = ProductRepo::dashboard_stats(&mut conn).await.unwrap();
    assert_eq!(stats.total, 7);
    assert_eq!(stats.max_price, 300.0);
    assert!((stats.avg_price - 1400.0 / 7.0).abs() < 1e-9);

    let counts: Vec<_> = stats
        .by_category
        .iter()
        .map(|c| (c.category.as_str(), c.count))
        .collect();
    assert_eq!(counts, vec![("Asus", 2), ("Dell", 5)]);

    assert_eq!(stats.recent.len(), 5);
    assert_eq!(stats.recent[0].name, "D4");
}
