use std::future::Future;

use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_planning::{
        entities::GroceryItems,
        value_objects::{
            ExtractItemsInput, GenerateMealPlanInput, GenerateRecipeInput, ReceiptImage,
        },
    },
};

/// Turns a receipt image into plain text.
pub trait OcrEngine: Send + Sync {
    fn extract_text(
        &self,
        image: &ReceiptImage,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// LLM Client trait for calling AI models
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: &ReceiptImage,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// `response_schema` switches the model to JSON output constrained by the schema.
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: Option<Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the receipt → meal plan → recipe workflow
pub trait MealPlanningService: Send + Sync {
    fn extract_items(
        &self,
        input: ExtractItemsInput,
    ) -> impl Future<Output = Result<GroceryItems, CoreError>> + Send;

    fn generate_meal_plan(
        &self,
        input: GenerateMealPlanInput,
    ) -> impl Future<Output = Result<Value, CoreError>> + Send;

    fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<Value, CoreError>> + Send;
}
