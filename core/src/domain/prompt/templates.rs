use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::common::entities::app_errors::CoreError;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern is valid"));

/// A fixed prompt with `{name}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub input_variables: &'static [&'static str],
    pub template: &'static str,
}

impl PromptTemplate {
    /// Substitute every declared variable. Unknown placeholders are left alone,
    /// a declared variable without a value is an error.
    pub fn render(&self, values: &HashMap<&str, String>) -> Result<String, CoreError> {
        if let Some(missing) = self
            .input_variables
            .iter()
            .find(|name| !values.contains_key(*name))
        {
            return Err(CoreError::MissingPromptVariable(missing.to_string()));
        }

        let rendered = PLACEHOLDER.replace_all(self.template, |caps: &Captures| {
            let key = &caps[1];
            match values.get(key) {
                Some(value) if self.declares(key) => value.clone(),
                _ => caps[0].to_string(),
            }
        });

        Ok(rendered.trim().to_string())
    }

    fn declares(&self, name: &str) -> bool {
        self.input_variables.iter().any(|declared| *declared == name)
    }
}

pub const ITEM_EXTRACTION: PromptTemplate = PromptTemplate {
    name: "item_extraction",
    input_variables: &["extracted_text"],
    template: r#"
This is the text extracted from a grocery bill using OCR: {extracted_text}.
Extract the list of grocery items from this text.
Only include items that are food, and write each one out by its full, readable name.
Return the items as a single list of quoted strings, like: ['Item 1 Name', 'Item 2 Name', 'Item 3 Name', ...]
Return only the list, with no preamble and no explanation.
"#,
};

pub const MEAL_PLAN: PromptTemplate = PromptTemplate {
    name: "meal_plan",
    input_variables: &[
        "age",
        "weight",
        "height",
        "gender",
        "diet_type",
        "allergies",
        "health_conditions",
        "health_goal",
        "cuisine",
        "item_list",
        "days_to_expiry",
    ],
    template: r#"
1. You are an AI nutritionist. Generate a 7-day meal plan (4 meals per day) based on the following details:
- Age: {age}
- Weight: {weight} kg
- Height: {height} cm
- Gender: {gender}
- Dietary Preferences: {diet_type}
- Allergies: {allergies}
- Health Conditions: {health_conditions}
- Health Goal: {health_goal}
- Preferred Cuisine: {cuisine}
- Available Ingredients: {item_list}
- Time Until Expiry (Days): {days_to_expiry}

2. Optimize the plan to minimize food waste by prioritizing the items that expire soonest.
3. Strictly do not repeat the exact same meal on consecutive days.
4. Double check your response before finalizing the meal plan.
5. Output the plan as a JSON object whose keys are the lowercase days of the week (monday, tuesday, wednesday, thursday, friday, saturday, sunday). Each day contains exactly 4 meals: breakfast, lunch, snacks, dinner.
6. The response must not contain any preamble. Return JSON text only: no markdown formatting, no triple backticks, no explanations.
"#,
};

pub const RECIPE: PromptTemplate = PromptTemplate {
    name: "recipe",
    input_variables: &["meal", "item_list", "days_to_expiry"],
    template: r#"
1. You are an AI nutritionist. Generate a recipe based on the following details:
- Meal: {meal}
- Items: {item_list}
- Time Until Expiry (Days): {days_to_expiry}
2. Optimize the recipe to minimize food waste by prioritizing the items that expire soonest. If absolutely needed, include items that are not in the items list, and say so in the ingredient note.
3. Double check your response before finalizing the recipe.
4. Output a JSON object with a "recipes" array. Every recipe has recipe_name, ingredients (each with item, quantity and note) and instructions.
5. The response must not contain any preamble. Return JSON text only.
"#,
};
