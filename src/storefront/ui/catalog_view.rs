//! Catalog View
//!
//! The scrolling product list, one section per category. After each section
//! is laid out, its on-screen fraction is measured against the scroll
//! viewport and fed to that section's visibility observer, which keeps the
//! category bar highlight in sync with the scroll position.


use crate::shared::Product;
use crate::storefront::app::{StorefrontApp, View};
use crate::storefront::catalog::CATEGORIES;

/// Render the catalog sections and drive the visibility observers.
pub fn render(ui: &mut egui::Ui, app: &mut StorefrontApp) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let viewport = ui.clip_rect();

            for (index, category) in CATEGORIES.iter().enumerate() {
                let in_section: Vec<usize> = app
                    .products
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.category_id == category.id)
                    .map(|(i, _)| i)
                    .collect();
                if in_section.is_empty() {
                    continue;
                }

                let section = ui.scope(|ui| {
                    ui.add_space(12.0);
                    ui.heading(category.name);
                    ui.add_space(8.0);
                    ui.horizontal_wrapped(|ui| {
                        for product_index in in_section {
                            if let Some(clicked) =
                                product_card(ui, &app.products[product_index])
                            {
                                app.view = View::Product(clicked);
                            }
                        }
                    });
                });

                if app.scroll_to == Some(category.id) {
                    section.response.scroll_to_me(Some(egui::Align::TOP));
                    app.scroll_to = None;
                }

                let fraction = visible_fraction(section.response.rect, viewport);
                app.observers[index].observe(fraction, &app.tracker);
            }
        });
}

/// One product card. Returns the product id when clicked.
fn product_card(ui: &mut egui::Ui, product: &Product) -> Option<i64> {
    let mut clicked = None;

    let card = egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(180.0);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&product.name).strong());
            ui.small(product.image_url.as_str());
            match product.display_price() {
                Some(price) => ui.label(format!("from {price} ₽")),
                None => ui.label("price on request"),
            };
            if ui.button("Choose").clicked() {
                clicked = Some(product.id);
            }
        });
    });
    let _ = card;

    clicked
}

/// Fraction of `rect` that overlaps the scroll viewport, 0.0 to 1.0.
fn visible_fraction(rect: egui::Rect, viewport: egui::Rect) -> f32 {
    if rect.height() <= 0.0 {
        return 0.0;
    }
    let top = rect.top().max(viewport.top());
    let bottom = rect.bottom().min(viewport.bottom());
    ((bottom - top).max(0.0) / rect.height()).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Rect};

    fn rect(top: f32, bottom: f32) -> Rect {
        Rect::from_min_max(pos2(0.0, top), pos2(100.0, bottom))
    }

    #[test]
    fn fully_visible_section() {
        assert_eq!(visible_fraction(rect(10.0, 110.0), rect(0.0, 600.0)), 1.0);
    }

    #[test]
    fn half_scrolled_out() {
        let fraction = visible_fraction(rect(-50.0, 50.0), rect(0.0, 600.0));
        assert!((fraction - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn off_screen_section() {
        assert_eq!(visible_fraction(rect(700.0, 800.0), rect(0.0, 600.0)), 0.0);
        assert_eq!(visible_fraction(rect(-200.0, -100.0), rect(0.0, 600.0)), 0.0);
    }

    #[test]
    fn zero_height_section() {
        assert_eq!(visible_fraction(rect(10.0, 10.0), rect(0.0, 600.0)), 0.0);
    }
}
