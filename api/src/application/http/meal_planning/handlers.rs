pub mod extract_items;
pub mod generate_meal_plan;
pub mod generate_recipe;
