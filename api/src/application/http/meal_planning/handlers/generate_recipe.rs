use axum::extract::State;
use mealwise_core::domain::meal_planning::ports::MealPlanningService;
use serde_json::Value;

use crate::application::http::{
    meal_planning::validators::GenerateRecipeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ErrorPolicy, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/generate-recipe",
    tag = "meal-planning",
    summary = "Generate recipes for a meal",
    description = "Returns a `recipes` array for the given meal, preferring items that expire soon.",
    request_body = GenerateRecipeRequest,
    responses(
        (status = 200, description = "Object with a `recipes` array", body = Object),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeRequest>,
) -> Result<Response<Value>, ApiError> {
    let recipe = state
        .service
        .generate_recipe(payload.into())
        .await
        .map_err(|e| ErrorPolicy::CatchAllBadRequest.to_api_error(e))?;

    Ok(Response::OK(recipe))
}
