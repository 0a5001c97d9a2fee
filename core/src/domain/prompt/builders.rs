use std::collections::HashMap;

use crate::domain::{
    common::entities::app_errors::CoreError,
    inventory::DaysToExpiry,
    meal_planning::entities::UserProfile,
    prompt::templates::{ITEM_EXTRACTION, MEAL_PLAN, RECIPE},
};

pub fn item_extraction_prompt(extracted_text: &str) -> Result<String, CoreError> {
    let values = HashMap::from([("extracted_text", extracted_text.to_string())]);
    ITEM_EXTRACTION.render(&values)
}

pub fn meal_plan_prompt(
    profile: &UserProfile,
    item_list: &[String],
    days_to_expiry: &DaysToExpiry,
) -> Result<String, CoreError> {
    let mut values: HashMap<&str, String> = profile.prompt_fields().into_iter().collect();
    values.insert("item_list", render_json(&item_list)?);
    values.insert("days_to_expiry", render_json(days_to_expiry)?);
    MEAL_PLAN.render(&values)
}

pub fn recipe_prompt(
    meal: Option<&str>,
    item_list: &[String],
    days_to_expiry: &DaysToExpiry,
) -> Result<String, CoreError> {
    let values = HashMap::from([
        ("meal", meal.unwrap_or("not specified").to_string()),
        ("item_list", render_json(&item_list)?),
        ("days_to_expiry", render_json(days_to_expiry)?),
    ]);
    RECIPE.render(&values)
}

fn render_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, CoreError> {
    serde_json::to_string(value)
        .map_err(|e| CoreError::ExternalServiceError(format!("Failed to render prompt: {}", e)))
}
