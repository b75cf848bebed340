//! Ingredients Filter Panel
//!
//! Checkbox list of ingredients with a collapsed five-item preview, a
//! "show all" toggle, and a local substring filter over the expanded list.
//! The filtering here is purely client-side over the already-loaded
//! ingredient list; it never touches the network.

use std::collections::HashSet;


use crate::shared::Ingredient;

/// How many ingredients the collapsed panel shows.
pub const PREVIEW_COUNT: usize = 5;

/// Panel state, owned by the app.
#[derive(Debug, Default)]
pub struct FiltersState {
    /// Local filter text, only active when expanded
    pub query: String,
    /// Whether the full list is shown
    pub show_all: bool,
    /// Checked ingredient ids
    pub selected: HashSet<i64>,
}

/// Render the panel.
pub fn render(ui: &mut egui::Ui, state: &mut FiltersState, ingredients: &[Ingredient]) {
    ui.add_space(8.0);
    ui.heading("Ingredients");
    ui.add_space(4.0);

    if state.show_all {
        ui.add(
            egui::TextEdit::singleline(&mut state.query).hint_text("Filter ingredients..."),
        );
        ui.add_space(4.0);
    }

    for ingredient in visible(ingredients, &state.query, state.show_all) {
        let mut checked = state.selected.contains(&ingredient.id);
        if ui
            .checkbox(&mut checked, format!("{}  +{} ₽", ingredient.name, ingredient.price))
            .changed()
        {
            if checked {
                state.selected.insert(ingredient.id);
            } else {
                state.selected.remove(&ingredient.id);
            }
        }
    }

    if ingredients.len() > PREVIEW_COUNT {
        ui.add_space(4.0);
        let label = if state.show_all { "- Hide" } else { "+ Show all" };
        if ui.link(label).clicked() {
            state.show_all = !state.show_all;
            if !state.show_all {
                state.query.clear();
            }
        }
    }
}

/// Which ingredients the panel currently lists: a capped preview when
/// collapsed, the substring-filtered full list when expanded.
fn visible<'a>(ingredients: &'a [Ingredient], query: &str, show_all: bool) -> Vec<&'a Ingredient> {
    if !show_all {
        return ingredients.iter().take(PREVIEW_COUNT).collect();
    }
    let needle = query.to_lowercase();
    ingredients
        .iter()
        .filter(|i| i.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(id: i64, name: &str) -> Ingredient {
        Ingredient {
            id,
            name: name.to_string(),
            price: 50,
            image_url: String::new(),
        }
    }

    fn pantry() -> Vec<Ingredient> {
        ["Mozzarella", "Cheddar", "Ham", "Mushrooms", "Red Onion", "Bacon", "Feta"]
            .iter()
            .enumerate()
            .map(|(i, name)| ingredient(i as i64 + 1, name))
            .collect()
    }

    #[test]
    fn collapsed_shows_the_preview() {
        let pantry = pantry();
        let shown = visible(&pantry, "", false);
        assert_eq!(shown.len(), PREVIEW_COUNT);
        assert_eq!(shown[0].name, "Mozzarella");
    }

    #[test]
    fn collapsed_ignores_the_query() {
        let pantry = pantry();
        let shown = visible(&pantry, "feta", false);
        assert_eq!(shown.len(), PREVIEW_COUNT);
    }

    #[test]
    fn expanded_filters_case_insensitively() {
        let pantry = pantry();
        let shown = visible(&pantry, "CHED", true);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "Cheddar");
    }

    #[test]
    fn expanded_empty_query_shows_everything() {
        let pantry = pantry();
        assert_eq!(visible(&pantry, "", true).len(), pantry.len());
    }
}
