pub mod common;
pub mod inventory;
pub mod meal_planning;
pub mod prompt;
