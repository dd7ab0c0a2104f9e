mod error;
pub mod handoff;

pub use error::*;

/// A detected or assumed food item, kept as its plain label.
pub type Ingredient = String;
