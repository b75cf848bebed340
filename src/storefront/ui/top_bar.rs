//! Top Bar
//!
//! The title row with the search box, and under it the category navigation
//! whose highlight follows the active-category tracker.


use crate::storefront::app::{StorefrontApp, View};
use crate::storefront::catalog::CATEGORIES;
use crate::storefront::ui::search_box;

/// Render the title bar and the category bar.
pub fn render(ctx: &egui::Context, app: &mut StorefrontApp) {
    egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.heading("Pizzetta");
            ui.add_space(16.0);
            search_box::render(ui, app);
        });
        ui.add_space(4.0);
    });

    egui::TopBottomPanel::top("category_bar").show(ctx, |ui| {
        let active = app.tracker.get();
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            for category in CATEGORIES {
                let selected = category.id == active;
                if ui.selectable_label(selected, category.name).clicked() {
                    // Jump the catalog to this section; the observer will
                    // update the highlight once it crosses into view.
                    app.view = View::Catalog;
                    app.scroll_to = Some(category.id);
                }
            }
        });
        ui.add_space(4.0);
    });
}
