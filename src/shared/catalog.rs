//! Catalog Data Structures
//!
//! Wire types for the product catalog: products, their priced variants, and
//! ingredients. The backend reads them out of SQLite and the storefront
//! decodes them from JSON, so everything here derives both serde traits.

use serde::{Deserialize, Serialize};

/// A catalog product as served by the API and rendered by the storefront.
///
/// A product always carries at least one priced variant; the storefront shows
/// the first variant's price on the card ("from …").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Image reference shown on the card and in search results
    pub image_url: String,
    /// Category this product is listed under (see the storefront's static
    /// category table)
    pub category_id: i64,
    /// Priced variants, in storage order
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Price of the first variant, if any. This is what product cards show.
    pub fn display_price(&self) -> Option<i64> {
        self.variants.first().map(|v| v.price)
    }
}

/// One purchasable variant of a product (a size/dough combination for
/// pizzas, a single row for everything else).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct ProductVariant {
    /// Unique variant id
    pub id: i64,
    /// Owning product
    pub product_id: i64,
    /// Price in whole currency units
    pub price: i64,
    /// Pizza size in centimeters, when applicable
    pub size: Option<i64>,
    /// Dough type discriminator, when applicable
    pub pizza_type: Option<i64>,
}

/// An ingredient offered as a topping and used by the filters panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Ingredient {
    /// Unique ingredient id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Surcharge in whole currency units
    pub price: i64,
    /// Image reference
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(id: i64, price: i64) -> ProductVariant {
        ProductVariant {
            id,
            product_id: 1,
            price,
            size: None,
            pizza_type: None,
        }
    }

    #[test]
    fn display_price_is_first_variant() {
        let product = Product {
            id: 1,
            name: "Pizza Margherita".to_string(),
            image_url: "/images/products/margherita.png".to_string(),
            category_id: 1,
            variants: vec![variant(1, 550), variant(2, 790)],
        };
        assert_eq!(product.display_price(), Some(550));
    }

    #[test]
    fn display_price_empty_variants() {
        let product = Product {
            id: 1,
            name: "Pizza Margherita".to_string(),
            image_url: String::new(),
            category_id: 1,
            variants: vec![],
        };
        assert_eq!(product.display_price(), None);
    }

    #[test]
    fn product_json_round_trip() {
        let product = Product {
            id: 7,
            name: "Four Cheese".to_string(),
            image_url: "/images/products/four-cheese.png".to_string(),
            category_id: 1,
            variants: vec![variant(11, 620)],
        };
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
