//! Demo Catalog Seed
//!
//! Fills an empty database with a small demo catalog so a freshly started
//! storefront has something to render. Runs only from `main`, never from
//! tests, and only when the products table is empty.

use chrono::Utc;
use sqlx::SqlitePool;

/// (price, size, pizza_type) triple for one variant row.
type SeedVariant = (i64, Option<i64>, Option<i64>);

/// Demo products: name, image slug, category id, variants.
const PRODUCTS: &[(&str, &str, i64, &[SeedVariant])] = &[
    (
        "Pizza Margherita",
        "margherita",
        1,
        &[(550, Some(25), Some(1)), (790, Some(30), Some(1)), (990, Some(35), Some(1))],
    ),
    (
        "Pizza Pepperoni",
        "pepperoni",
        1,
        &[(590, Some(25), Some(1)), (850, Some(30), Some(1)), (1050, Some(35), Some(1))],
    ),
    (
        "Four Cheese Pizza",
        "four-cheese",
        1,
        &[(620, Some(25), Some(2)), (880, Some(30), Some(2))],
    ),
    (
        "Bavarian Pizza",
        "bavarian",
        1,
        &[(500, Some(25), Some(1)), (720, Some(30), Some(1))],
    ),
    (
        "Hawaiian Pizza",
        "hawaiian",
        1,
        &[(570, Some(25), Some(1)), (820, Some(30), Some(1))],
    ),
    ("Garlic Breadsticks", "breadsticks", 2, &[(250, None, None)]),
    ("Chicken Wings", "wings", 2, &[(390, None, None)]),
    ("Vanilla Milkshake", "milkshake", 3, &[(290, None, None)]),
    ("Cappuccino", "cappuccino", 4, &[(190, None, None)]),
    ("Latte", "latte", 4, &[(210, None, None)]),
    ("Cola 0.5L", "cola", 5, &[(120, None, None)]),
    ("Orange Juice", "orange-juice", 5, &[(150, None, None)]),
    ("Cheesecake", "cheesecake", 6, &[(320, None, None)]),
    ("Chocolate Muffin", "muffin", 6, &[(180, None, None)]),
    ("Garlic Sauce", "garlic-sauce", 7, &[(60, None, None)]),
    ("Pizza Night Combo", "combo", 8, &[(1390, None, None)]),
];

/// Demo ingredients: name, surcharge, image slug.
const INGREDIENTS: &[(&str, i64, &str)] = &[
    ("Mozzarella", 79, "mozzarella"),
    ("Cheddar", 79, "cheddar"),
    ("Ham", 99, "ham"),
    ("Pepperoni", 99, "pepperoni"),
    ("Mushrooms", 59, "mushrooms"),
    ("Red Onion", 49, "red-onion"),
    ("Jalapeno", 59, "jalapeno"),
    ("Pineapple", 69, "pineapple"),
    ("Bacon", 99, "bacon"),
    ("Cherry Tomatoes", 69, "cherry-tomatoes"),
    ("Feta", 89, "feta"),
    ("Fresh Basil", 39, "basil"),
];

/// Seed the demo catalog if the database is empty.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let (products,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    if products > 0 {
        tracing::debug!("catalog already populated ({products} products), skipping seed");
        return Ok(());
    }

    tracing::info!("empty catalog, inserting demo data");
    let now = Utc::now();

    for (name, slug, category_id, variants) in PRODUCTS {
        let inserted = sqlx::query(
            "INSERT INTO products (name, image_url, category_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(format!("/images/products/{slug}.png"))
        .bind(category_id)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        let product_id = inserted.last_insert_rowid();
        for (price, size, pizza_type) in variants.iter() {
            sqlx::query(
                "INSERT INTO product_variants (product_id, price, size, pizza_type)
                 VALUES (?, ?, ?, ?)",
            )
            .bind(product_id)
            .bind(price)
            .bind(size)
            .bind(pizza_type)
            .execute(pool)
            .await?;
        }
    }

    for (name, price, slug) in INGREDIENTS {
        sqlx::query("INSERT INTO ingredients (name, price, image_url) VALUES (?, ?, ?)")
            .bind(name)
            .bind(price)
            .bind(format!("/images/ingredients/{slug}.png"))
            .execute(pool)
            .await?;
    }

    tracing::info!(
        "seeded {} products and {} ingredients",
        PRODUCTS.len(),
        INGREDIENTS.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::ensure_schema;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        ensure_schema(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn seeds_once() {
        let pool = memory_pool().await;
        seed_if_empty(&pool).await.unwrap();
        seed_if_empty(&pool).await.unwrap();

        let (products,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(products, PRODUCTS.len() as i64);
    }

    #[tokio::test]
    async fn every_product_gets_variants() {
        let pool = memory_pool().await;
        seed_if_empty(&pool).await.unwrap();

        let (orphans,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM products p
             WHERE NOT EXISTS (SELECT 1 FROM product_variants v WHERE v.product_id = p.id)",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(orphans, 0);
    }
}
