use std::collections::BTreeMap;

use mealwise_core::domain::meal_planning::{
    entities::UserProfile,
    value_objects::{GenerateMealPlanInput, GenerateRecipeInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Multipart body for `/extract-items`.
#[derive(Debug, ToSchema)]
pub struct ExtractItemsForm {
    /// Photo of the grocery receipt (PNG, JPEG, WebP, ...).
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateMealPlanRequest {
    #[serde(flatten)]
    pub profile: UserProfile,

    #[serde(default)]
    #[validate(length(max = 500, message = "item_list can hold at most 500 items"))]
    pub item_list: Option<Vec<String>>,

    /// Item name → expiry date (`YYYY-MM-DD`).
    #[serde(default)]
    #[schema(example = json!({"Milk": "2024-03-14"}))]
    pub expiry_dates: Option<BTreeMap<String, String>>,
}

impl From<GenerateMealPlanRequest> for GenerateMealPlanInput {
    fn from(request: GenerateMealPlanRequest) -> Self {
        GenerateMealPlanInput {
            profile: request.profile,
            item_list: request.item_list.unwrap_or_default(),
            expiry_dates: request.expiry_dates.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipeRequest {
    #[serde(default)]
    #[validate(length(max = 1000, message = "meal must be at most 1000 characters"))]
    #[schema(example = "Spinach and paneer curry")]
    pub meal: Option<String>,

    #[serde(default)]
    #[validate(length(max = 500, message = "item_list can hold at most 500 items"))]
    pub item_list: Option<Vec<String>>,

    #[serde(default)]
    pub expiry_dates: Option<BTreeMap<String, String>>,
}

impl From<GenerateRecipeRequest> for GenerateRecipeInput {
    fn from(request: GenerateRecipeRequest) -> Self {
        GenerateRecipeInput {
            meal: request.meal,
            item_list: request.item_list.unwrap_or_default(),
            expiry_dates: request.expiry_dates.unwrap_or_default(),
        }
    }
}
