use axum::extract::State;
use mealwise_core::domain::meal_planning::ports::MealPlanningService;
use serde_json::Value;

use crate::application::http::{
    meal_planning::validators::GenerateMealPlanRequest,
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
    path = "/generate-meal-plan",
    tag = "meal-planning",
    summary = "Generate a 7-day meal plan",
    description = "Builds a weekly plan (breakfast, lunch, snacks, dinner) that uses soon-to-expire items first.",
    request_body = GenerateMealPlanRequest,
    responses(
        (status = 200, description = "Plan keyed by lowercase weekday", body = Object),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateMealPlanRequest>,
) -> Result<Response<Value>, ApiError> {
    let meal_plan = state
        .service
        .generate_meal_plan(payload.into())
        .await
        .map_err(|e| ErrorPolicy::CatchAllBadRequest.to_api_error(e))?;

    Ok(Response::OK(meal_plan))
}
