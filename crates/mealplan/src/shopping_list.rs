use std::collections::HashSet;

use crate::MealDay;

/// Categories added to the shopping list for every planned day.
///
/// Meal contents are not inspected: any non-empty plan yields these eight
/// labels, in this order.
pub const SHOPPING_CATEGORIES: [&str; 8] = [
    "Fruit", "Bread", "Lettuce", "Tomato", "Onion", "Rice", "Beans", "Egg",
];

pub fn shopping_list(meals: &[MealDay]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for _day in meals {
        for category in SHOPPING_CATEGORIES {
            if seen.insert(category) {
                items.push(category.to_owned());
            }
        }
    }

    items
}
