//! Product Detail View
//!
//! The screen a search selection or card click navigates to. Shows the
//! product's variants with their prices; if the id is unknown (catalog
//! still loading, or a stale link), it offers the way back instead of
//! failing.


use crate::storefront::app::{StorefrontApp, View};
use crate::storefront::catalog::category_by_id;

/// Render the detail screen for `product_id`.
pub fn render(ui: &mut egui::Ui, app: &mut StorefrontApp, product_id: i64) {
    if ui.button("< Back to catalog").clicked() {
        app.view = View::Catalog;
        return;
    }
    ui.add_space(12.0);

    let Some(product) = app.products.iter().find(|p| p.id == product_id) else {
        ui.label("This product is no longer available.");
        return;
    };

    ui.heading(product.name.as_str());
    ui.small(product.image_url.as_str());
    if let Some(category) = category_by_id(product.category_id) {
        ui.label(format!("Category: {}", category.name));
    }
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Variants").strong());
    for variant in &product.variants {
        let mut parts = Vec::new();
        if let Some(size) = variant.size {
            parts.push(format!("{size} cm"));
        }
        if let Some(pizza_type) = variant.pizza_type {
            let dough = if pizza_type == 2 { "thin" } else { "traditional" };
            parts.push(dough.to_string());
        }
        let description = if parts.is_empty() {
            "standard".to_string()
        } else {
            parts.join(", ")
        };
        ui.label(format!("{description}  {} ₽", variant.price));
    }
}
