use serde_json::Value;
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    inventory::days_to_expiry_from_today,
    meal_planning::{
        entities::GroceryItems,
        normalizer::{parse_item_list, parse_json_response},
        ports::{LLMClient, MealPlanningService, OcrEngine},
        schema::{get_meal_plan_schema, get_recipe_schema},
        value_objects::{ExtractItemsInput, GenerateMealPlanInput, GenerateRecipeInput},
    },
    prompt::{item_extraction_prompt, meal_plan_prompt, recipe_prompt},
};

impl<O, L> Service<O, L>
where
    O: OcrEngine,
    L: LLMClient,
{
    /// Send a rendered prompt and normalize whatever text comes back.
    async fn complete<T: Send>(
        &self,
        prompt: String,
        response_schema: Option<Value>,
        normalize: fn(&str) -> Result<T, CoreError>,
    ) -> Result<T, CoreError> {
        let raw_response = self
            .llm_client
            .generate_with_text(prompt, response_schema)
            .await?;

        normalize(&raw_response).inspect_err(|e| {
            tracing::error!("Failed to normalize LLM response: {}", e);
        })
    }

    fn schema(&self, schema: fn() -> Value) -> Option<Value> {
        self.structured_output.then(schema)
    }
}

impl<O, L> MealPlanningService for Service<O, L>
where
    O: OcrEngine,
    L: LLMClient,
{
    #[instrument(skip(self, input), fields(image_bytes = input.image.data.len(), mime_type = input.image.mime_type))]
    async fn extract_items(&self, input: ExtractItemsInput) -> Result<GroceryItems, CoreError> {
        let extracted_text = self.ocr_engine.extract_text(&input.image).await?;
        tracing::debug!(chars = extracted_text.len(), "OCR finished");

        let prompt = item_extraction_prompt(&extracted_text)?;
        let grocery_items = self.complete(prompt, None, parse_item_list).await?;

        Ok(GroceryItems { grocery_items })
    }

    #[instrument(skip(self, input), fields(items = input.item_list.len(), expiry_dates = input.expiry_dates.len()))]
    async fn generate_meal_plan(&self, input: GenerateMealPlanInput) -> Result<Value, CoreError> {
        let days_to_expiry = days_to_expiry_from_today(&input.expiry_dates)?;
        let prompt = meal_plan_prompt(&input.profile, &input.item_list, &days_to_expiry)?;

        self.complete(prompt, self.schema(get_meal_plan_schema), parse_json_response)
            .await
    }

    #[instrument(skip(self, input), fields(items = input.item_list.len(), expiry_dates = input.expiry_dates.len()))]
    async fn generate_recipe(&self, input: GenerateRecipeInput) -> Result<Value, CoreError> {
        let days_to_expiry = days_to_expiry_from_today(&input.expiry_dates)?;
        let prompt = recipe_prompt(input.meal.as_deref(), &input.item_list, &days_to_expiry)?;

        self.complete(prompt, self.schema(get_recipe_schema), parse_json_response)
            .await
    }
}
