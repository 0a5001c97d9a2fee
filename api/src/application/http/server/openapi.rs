use crate::application::http::{
    health::HealthApiDoc, meal_planning::router::MealPlanningApiDoc,
    server::api_entities::api_error::ApiErrorResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mealwise API",
        description = "Grocery receipt OCR, meal plans and recipes generated by an LLM."
    ),
    components(schemas(ApiErrorResponse))
)]
pub struct ApiDoc;

/// The full document: base info plus every route group.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
        .merge_from(MealPlanningApiDoc::openapi())
        .merge_from(HealthApiDoc::openapi())
}
