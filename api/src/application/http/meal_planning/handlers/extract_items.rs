use axum::extract::{Multipart, State, multipart::MultipartRejection};
use mealwise_core::domain::meal_planning::{
    entities::GroceryItems,
    ports::MealPlanningService,
    value_objects::{ExtractItemsInput, ReceiptImage},
};

use crate::application::http::{
    meal_planning::validators::ExtractItemsForm,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ErrorPolicy},
            response::Response,
        },
        app_state::AppState,
    },
};

pub const NO_IMAGE_PROVIDED: &str = "No image provided";

#[utoipa::path(
    post,
    path = "/extract-items",
    tag = "meal-planning",
    summary = "Extract grocery items from a receipt",
    description = "Runs OCR on the uploaded receipt and asks the LLM to list the food items on it.",
    request_body(content = ExtractItemsForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = GroceryItems),
        (status = 400, description = "No image, or not an image", body = ApiErrorResponse),
        (status = 500, description = "LLM output could not be parsed; `llm_output` holds the raw text", body = ApiErrorResponse)
    ),
)]
pub async fn extract_items(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<GroceryItems>, ApiError> {
    let policy = ErrorPolicy::AttachLlmOutput;
    let max_image_bytes = state.args.server.max_image_bytes;

    let mut multipart =
        multipart.map_err(|_| ApiError::BadRequest(NO_IMAGE_PROVIDED.to_string()))?;
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > max_image_bytes {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                max_image_bytes
            )));
        }

        image_data = Some(data.to_vec());
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest(NO_IMAGE_PROVIDED.to_string()))?;
    let image = ReceiptImage::from_bytes(image_data).map_err(|e| policy.to_api_error(e))?;

    let items = state
        .service
        .extract_items(ExtractItemsInput { image })
        .await
        .map_err(|e| policy.to_api_error(e))?;

    Ok(Response::OK(items))
}
