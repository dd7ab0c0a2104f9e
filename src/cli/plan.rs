use anyhow::Result;
use pantrycam_mealplan::{MealDay, PlanningView};
use pantrycam_shared::handoff::{self, INGREDIENTS_PARAM, PLANNING_ROUTE};
use serde::Serialize;

#[derive(Serialize)]
struct PlanOutput<'a> {
    ingredients: &'a [String],
    meals: &'a [MealDay],
    shopping: Vec<String>,
    planning_href: String,
    shopping_href: String,
}

/// Runs ingredients -> meal plan -> shopping list and prints it as JSON.
pub fn run(ingredients: Vec<String>) -> Result<()> {
    let view = PlanningView::from_ingredients(ingredients);

    let output = PlanOutput {
        ingredients: &view.ingredients,
        meals: &view.meals,
        shopping: view.shopping_list(),
        planning_href: handoff::href(PLANNING_ROUTE, INGREDIENTS_PARAM, &view.ingredients)?,
        shopping_href: view.shopping_href()?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
