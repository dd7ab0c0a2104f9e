use strum::VariantArray;

use crate::{MealDay, MealSlot, Weekday};

pub const DEFAULT_BREAKFAST: &str = "Breakfast with fruit and bread";
pub const DEFAULT_LUNCH: &str = "Lettuce salad with tomato and onion";
pub const DEFAULT_DINNER: &str = "Rice, beans and egg";

pub const TOMATO_ONION_SALAD: &str = "Tomato and onion salad";
pub const RICE_AND_BEANS: &str = "Rice and beans";

/// Replaces one meal on every day when all `requires` labels are present.
#[derive(Debug, Clone, Copy)]
pub struct Override {
    pub requires: [&'static str; 2],
    pub slot: MealSlot,
    pub meal: &'static str,
}

impl Override {
    /// Labels are compared exactly, case included.
    pub fn matches<S: AsRef<str>>(&self, ingredients: &[S]) -> bool {
        self.requires
            .iter()
            .all(|required| ingredients.iter().any(|i| i.as_ref() == *required))
    }
}

pub const OVERRIDES: [Override; 2] = [
    Override {
        requires: ["tomato", "onion"],
        slot: MealSlot::Lunch,
        meal: TOMATO_ONION_SALAD,
    },
    Override {
        requires: ["rice", "beans"],
        slot: MealSlot::Dinner,
        meal: RICE_AND_BEANS,
    },
];

/// Builds the seven default days, Monday first.
pub fn default_week() -> Vec<MealDay> {
    Weekday::VARIANTS
        .iter()
        .map(|day| MealDay {
            day: *day,
            breakfast: DEFAULT_BREAKFAST.to_owned(),
            lunch: DEFAULT_LUNCH.to_owned(),
            dinner: DEFAULT_DINNER.to_owned(),
        })
        .collect()
}

pub fn generate<S: AsRef<str>>(ingredients: &[S]) -> Vec<MealDay> {
    let mut week = default_week();

    for rule in OVERRIDES.iter().filter(|rule| rule.matches(ingredients)) {
        tracing::debug!(slot = %rule.slot, meal = rule.meal, "meal override applied");

        for day in week.iter_mut() {
            *day.meal_mut(rule.slot) = rule.meal.to_owned();
        }
    }

    week
}
