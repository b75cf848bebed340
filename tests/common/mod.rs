//! Shared test fixtures: in-memory databases and a test server over the
//! real router.

#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Utc;
use pizzetta::backend::server::config::ensure_schema;
use pizzetta::backend::server::create_app;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// A fresh in-memory database with the schema applied. Pinned to a single
/// connection so every query sees the same memory database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    ensure_schema(&pool).await.expect("schema");
    pool
}

/// A test server over the real application router.
pub fn test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(create_app(pool)).expect("test server")
}

/// Insert a product with one variant per price. Returns the product id.
pub async fn insert_product(
    pool: &SqlitePool,
    name: &str,
    category_id: i64,
    prices: &[i64],
) -> i64 {
    let now = Utc::now();
    let inserted = sqlx::query(
        "INSERT INTO products (name, image_url, category_id, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(name)
    .bind(format!("/images/{name}.png"))
    .bind(category_id)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("insert product");

    let product_id = inserted.last_insert_rowid();
    for price in prices {
        sqlx::query("INSERT INTO product_variants (product_id, price) VALUES (?, ?)")
            .bind(product_id)
            .bind(price)
            .execute(pool)
            .await
            .expect("insert variant");
    }
    product_id
}

/// Insert one ingredient.
pub async fn insert_ingredient(pool: &SqlitePool, name: &str, price: i64) {
    sqlx::query("INSERT INTO ingredients (name, price, image_url) VALUES (?, ?, ?)")
        .bind(name)
        .bind(price)
        .bind(format!("/images/{name}.png"))
        .execute(pool)
        .await
        .expect("insert ingredient");
}
