//! Catalog Database Operations
//!
//! All catalog reads live here: ingredients, the full product list, and the
//! name search backing the storefront search box. Queries are plain sqlx
//! with positional binds; products are assembled from their variant rows
//! after the fact since a product row alone has no price.

use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::shared::{Ingredient, Product, ProductVariant};

/// Hard cap on search results. The dropdown never shows more than this,
/// and the endpoint enforces it so clients cannot ask for more.
pub const MAX_SEARCH_RESULTS: i64 = 5;

/// Flat product row; variants are attached separately.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    image_url: String,
    category_id: i64,
}

impl ProductRow {
    fn into_product(self, variants: Vec<ProductVariant>) -> Product {
        Product {
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            category_id: self.category_id,
            variants,
        }
    }
}

/// Fetch every ingredient, in storage order.
pub async fn list_ingredients(pool: &SqlitePool) -> Result<Vec<Ingredient>, sqlx::Error> {
    sqlx::query_as::<_, Ingredient>("SELECT id, name, price, image_url FROM ingredients")
        .fetch_all(pool)
        .await
}

/// Fetch the whole catalog with variants attached, in storage order.
pub async fn list_products(pool: &SqlitePool) -> Result<Vec<Product>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProductRow>(
        "SELECT id, name, image_url, category_id FROM products",
    )
    .fetch_all(pool)
    .await?;

    let variants = sqlx::query_as::<_, ProductVariant>(
        "SELECT id, product_id, price, size, pizza_type
         FROM product_variants
         ORDER BY product_id, id",
    )
    .fetch_all(pool)
    .await?;

    let mut by_product: HashMap<i64, Vec<ProductVariant>> = HashMap::new();
    for variant in variants {
        by_product.entry(variant.product_id).or_default().push(variant);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let variants = by_product.remove(&row.id).unwrap_or_default();
            row.into_product(variants)
        })
        .collect())
}

/// Case-insensitive substring search on product name, capped at
/// [`MAX_SEARCH_RESULTS`].
///
/// An empty query matches everything, so the first rows of the table come
/// back (still capped). LIKE metacharacters in the query are escaped and
/// match literally.
pub async fn search_products(
    pool: &SqlitePool,
    query: &str,
) -> Result<Vec<Product>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProductRow>(
        r"SELECT id, name, image_url, category_id
          FROM products
          WHERE name LIKE '%' || ? || '%' ESCAPE '\'
          LIMIT ?",
    )
    .bind(escape_like(query))
    .bind(MAX_SEARCH_RESULTS)
    .fetch_all(pool)
    .await?;

    let mut products = Vec::with_capacity(rows.len());
    for row in rows {
        let variants = variants_for(pool, row.id).await?;
        products.push(row.into_product(variants));
    }

    Ok(products)
}

/// Variant rows for a single product, insertion order.
async fn variants_for(
    pool: &SqlitePool,
    product_id: i64,
) -> Result<Vec<ProductVariant>, sqlx::Error> {
    sqlx::query_as::<_, ProductVariant>(
        "SELECT id, product_id, price, size, pizza_type
         FROM product_variants
         WHERE product_id = ?
         ORDER BY id",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await
}

/// Escape LIKE metacharacters so the user's text matches literally.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
