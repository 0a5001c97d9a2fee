pub mod health;
pub mod meal_planning;
pub mod server;
