//! Search Box Widget
//!
//! The text field plus its results dropdown. All behavior lives in the
//! [`SearchController`]; this file only translates egui events into
//! controller calls: edits feed `input`, focus feeds `focus`, a click
//! outside feeds `click_away`, and picking a result feeds `select` and
//! navigates to the product.

use std::time::Instant;


use crate::storefront::app::{StorefrontApp, View};
use crate::storefront::search::SearchController;

/// Render the search box and, when the controller says so, its dropdown.
pub fn render(ui: &mut egui::Ui, app: &mut StorefrontApp) {
    let mut text = app.search.query().to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut text)
            .hint_text("Find a pizza...")
            .desired_width(280.0),
    );

    if response.changed() {
        app.search.input(&text, Instant::now());
    }
    if response.gained_focus() {
        app.search.focus();
    }

    let selected = render_dropdown(ui.ctx(), &response, &app.search);

    if let Some(product_id) = selected {
        app.search.select();
        app.view = View::Product(product_id);
    } else if response.clicked_elsewhere() {
        app.search.click_away();
    }
}

/// Draw the dropdown under the text field. Returns the clicked product id,
/// if any.
fn render_dropdown(
    ctx: &egui::Context,
    anchor: &egui::Response,
    search: &SearchController,
) -> Option<i64> {
    if !search.dropdown_visible() {
        return None;
    }

    let mut selected = None;
    let position = anchor.rect.left_bottom() + egui::vec2(0.0, 4.0);

    egui::Area::new(egui::Id::new("search_dropdown"))
        .order(egui::Order::Foreground)
        .fixed_pos(position)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(anchor.rect.width());
                for product in search.results() {
                    let label = match product.display_price() {
                        Some(price) => format!("{}  {} ₽", product.name, price),
                        None => product.name.clone(),
                    };
                    if ui
                        .add(egui::Button::new(label).frame(false).wrap())
                        .clicked()
                    {
                        selected = Some(product.id);
                    }
                }
            });
        });

    selected
}
