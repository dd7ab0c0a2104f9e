use pantrycam_shared::{
    Ingredient,
    handoff::{self, SHOPPING_PARAM, SHOPPING_ROUTE},
};

use crate::MealDay;

/// State of the planning page, rebuilt from the ingredient payload on every
/// load.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlanningView {
    pub ingredients: Vec<Ingredient>,
    pub meals: Vec<MealDay>,
}

impl PlanningView {
    /// `param` is the percent-decoded `ingredients` query value.
    ///
    /// An absent or empty value gives an empty plan. A value that does not
    /// decode is logged and also gives an empty plan.
    pub fn load(param: Option<&str>) -> Self {
        let Some(raw) = param.filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };

        match handoff::decode(raw) {
            Ok(ingredients) => Self::from_ingredients(ingredients),
            Err(err) => {
                tracing::error!(err = %err, "failed to parse ingredients");

                Self::default()
            }
        }
    }

    pub fn from_ingredients(ingredients: Vec<Ingredient>) -> Self {
        let meals = crate::generate(&ingredients);

        Self { ingredients, meals }
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn shopping_list(&self) -> Vec<String> {
        crate::shopping_list(&self.meals)
    }

    pub fn shopping_href(&self) -> pantrycam_shared::Result<String> {
        handoff::href(SHOPPING_ROUTE, SHOPPING_PARAM, &self.shopping_list())
    }
}
