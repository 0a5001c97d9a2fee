use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Caller-supplied attributes for a meal plan. Nothing is validated beyond
/// being well-formed JSON; every field is rendered into the prompt as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub weight: Option<Value>,
    #[serde(default)]
    pub height: Option<Value>,
    #[serde(default)]
    pub gender: Option<Value>,
    #[serde(default)]
    pub diet_type: Option<Value>,
    #[serde(default)]
    pub allergies: Option<Value>,
    #[serde(default)]
    pub health_conditions: Option<Value>,
    #[serde(default)]
    pub health_goal: Option<Value>,
    #[serde(default)]
    pub cuisine: Option<Value>,
}

impl UserProfile {
    /// Prompt variable name → rendered value, in template order.
    pub fn prompt_fields(&self) -> [(&'static str, String); 9] {
        [
            ("age", describe(&self.age)),
            ("weight", describe(&self.weight)),
            ("height", describe(&self.height)),
            ("gender", describe(&self.gender)),
            ("diet_type", describe(&self.diet_type)),
            ("allergies", describe(&self.allergies)),
            ("health_conditions", describe(&self.health_conditions)),
            ("health_goal", describe(&self.health_goal)),
            ("cuisine", describe(&self.cuisine)),
        ]
    }
}

fn describe(value: &Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => "not specified".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(values)) if values.is_empty() => "none".to_string(),
        Some(Value::Array(values)) => values
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

/// Item names read off a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroceryItems {
    pub grocery_items: Vec<String>,
}
