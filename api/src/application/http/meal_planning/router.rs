use super::handlers::{
    extract_items::{__path_extract_items, extract_items},
    generate_meal_plan::{__path_generate_meal_plan, generate_meal_plan},
    generate_recipe::{__path_generate_recipe, generate_recipe},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(extract_items, generate_meal_plan, generate_recipe))]
pub struct MealPlanningApiDoc;

pub fn meal_planning_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    // room for the multipart framing around the image itself
    let upload_limit = state.args.server.max_image_bytes + 64 * 1024;

    Router::new()
        .route(
            &format!("{}/extract-items", root_path),
            post(extract_items).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            &format!("{}/generate-meal-plan", root_path),
            post(generate_meal_plan),
        )
        .route(
            &format!("{}/generate-recipe", root_path),
            post(generate_recipe),
        )
}
