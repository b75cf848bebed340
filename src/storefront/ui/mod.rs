//! Storefront UI
//!
//! Immediate-mode rendering over the app state. Layout: a top bar with the
//! search box, a sticky category bar under it, an ingredients filter panel
//! on the left, and the scrolling catalog (or a product detail view) in
//! the center.


use crate::storefront::app::{StorefrontApp, View};

/// Catalog sections and product cards
pub mod catalog_view;

/// Ingredients filter panel
pub mod filters;

/// Product detail screen
pub mod product_view;

/// Debounced search box with its dropdown
pub mod search_box;

/// Title, search box, and category navigation
pub mod top_bar;

/// Render one frame.
pub fn render(ctx: &egui::Context, app: &mut StorefrontApp) {
    top_bar::render(ctx, app);

    match app.view {
        View::Catalog => {
            egui::SidePanel::left("filters_panel")
                .resizable(false)
                .default_width(220.0)
                .show(ctx, |ui| {
                    filters::render(ui, &mut app.filters, &app.ingredients);
                });
            egui::CentralPanel::default().show(ctx, |ui| {
                catalog_view::render(ui, app);
            });
        }
        View::Product(id) => {
            egui::CentralPanel::default().show(ctx, |ui| {
                product_view::render(ui, app, id);
            });
        }
    }
}
