use serde::Serialize;
use strum::{Display, VariantArray};

#[derive(
    VariantArray,
    Display,
    Serialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Display, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

/// The three meals assigned to one weekday.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MealDay {
    pub day: Weekday,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

impl MealDay {
    pub fn meal(&self, slot: MealSlot) -> &str {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub(crate) fn meal_mut(&mut self, slot: MealSlot) -> &mut String {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }
}
