//! Static Category Table
//!
//! The navigation categories are fixed reference data on the client;
//! products point into them through `category_id`.

/// A catalog section in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: &'static str,
}

/// All known categories, in navigation order.
pub const CATEGORIES: &[Category] = &[
    Category { id: 1, name: "Pizzas" },
    Category { id: 2, name: "Snacks" },
    Category { id: 3, name: "Cocktails" },
    Category { id: 4, name: "Coffee" },
    Category { id: 5, name: "Drinks" },
    Category { id: 6, name: "Desserts" },
    Category { id: 7, name: "Sauces" },
    Category { id: 8, name: "Combos" },
];

/// Initial active category: the first section on the page.
pub const DEFAULT_CATEGORY_ID: i64 = 1;

/// Look up a category by id.
pub fn category_by_id(id: i64) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            for b in &CATEGORIES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn default_is_a_known_category() {
        assert!(category_by_id(DEFAULT_CATEGORY_ID).is_some());
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(category_by_id(999).is_none());
    }
}
