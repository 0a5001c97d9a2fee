use serde_json::{Map, Value, json};

pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

pub const MEALS: [&str; 4] = ["breakfast", "lunch", "snacks", "dinner"];

/// JSON schema for a 7-day meal plan, sent to the model when structured output is enabled.
pub fn get_meal_plan_schema() -> Value {
    let meal_properties: Map<String, Value> = MEALS
        .iter()
        .map(|meal| (meal.to_string(), json!({ "type": "string" })))
        .collect();
    let day = json!({
        "type": "object",
        "properties": meal_properties,
        "required": MEALS,
    });

    let day_properties: Map<String, Value> = WEEKDAYS
        .iter()
        .map(|weekday| (weekday.to_string(), day.clone()))
        .collect();
    json!({
        "type": "object",
        "properties": day_properties,
        "required": WEEKDAYS,
    })
}

/// JSON schema for recipe responses
pub fn get_recipe_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "recipes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "recipe_name": { "type": "string" },
                        "ingredients": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "item": { "type": "string" },
                                    "quantity": { "type": "string" },
                                    "note": { "type": "string" }
                                },
                                "required": ["item", "quantity"]
                            }
                        },
                        "instructions": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["recipe_name", "ingredients", "instructions"]
                }
            }
        },
        "required": ["recipes"]
    })
}
