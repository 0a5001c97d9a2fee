use std::sync::Arc;

use axum::http::{HeaderValue, Method, StatusCode, header};
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use chrono::{Duration, Local};
use clap::Parser;
use httpmock::prelude::*;
use mealwise_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use test_context::{AsyncTestContext, test_context};

const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
const MODEL_PATH: &str = "/v1beta/models/gemini-test:generateContent";

struct ApiContext {
    gemini: MockServer,
    server: TestServer,
}

fn test_server(gemini: &MockServer, extra_args: &[&str]) -> TestServer {
    let base_url = gemini.base_url();
    let mut argv = vec![
        "mealwise-api",
        "--gemini-api-key",
        "test-key",
        "--gemini-model",
        "gemini-test",
        "--gemini-base-url",
        base_url.as_str(),
        "--ocr-backend",
        "gemini",
        "--allowed-origins",
        "*",
    ];
    argv.extend_from_slice(extra_args);
    let args = Args::try_parse_from(argv).expect("test arguments parse");

    let app = router(state(Arc::new(args))).expect("router builds");
    TestServer::new(app).expect("test server starts")
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let gemini = MockServer::start_async().await;
        let server = test_server(&gemini, &[]);

        Self { gemini, server }
    }
}

/// Same as [`ApiContext`] with a 16 byte upload cap.
struct SmallUploadContext {
    gemini: MockServer,
    server: TestServer,
}

impl AsyncTestContext for SmallUploadContext {
    async fn setup() -> Self {
        let gemini = MockServer::start_async().await;
        let server = test_server(&gemini, &["--max-image-bytes", "16"]);

        Self { gemini, server }
    }
}

fn gemini_reply(text: &str) -> Value {
    json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
}

fn receipt_form() -> MultipartForm {
    MultipartForm::new().add_part(
        "image",
        Part::bytes(PNG.to_vec())
            .file_name("receipt.png")
            .mime_type("image/png"),
    )
}

fn in_days(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

#[test_context(ApiContext)]
#[tokio::test]
async fn extract_items_without_image_field(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/extract-items")
        .multipart(MultipartForm::new().add_text("note", "no picture here"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "No image provided" }));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn extract_items_with_non_multipart_body(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/extract-items")
        .json(&json!({ "image": "base64?" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "No image provided" }));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn extract_items_rejects_non_image_upload(ctx: &mut ApiContext) {
    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(b"just some text".to_vec()).file_name("receipt.txt"),
    );

    let response = ctx.server.post("/extract-items").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid image"));
}

#[test_context(SmallUploadContext)]
#[tokio::test]
async fn extract_items_rejects_oversize_image(ctx: &mut SmallUploadContext) {
    let mock = ctx
        .gemini
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200).json_body(gemini_reply("['Milk']"));
        })
        .await;
    let mut image = PNG.to_vec();
    image.extend_from_slice(&[0u8; 64]);
    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(image)
            .file_name("receipt.png")
            .mime_type("image/png"),
    );

    let response = ctx.server.post("/extract-items").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Image too large"));
    mock.assert_hits_async(0).await;
}

#[test_context(ApiContext)]
#[tokio::test]
async fn extract_items_returns_grocery_list(ctx: &mut ApiContext) {
    let ocr = ctx
        .gemini
        .mock_async(|when, then| {
            when.method(POST)
                .path(MODEL_PATH)
                .body_contains("Transcribe all of the text");
            then.status(200)
                .json_body(gemini_reply("WHL MILK 1GAL 3.99\nLG EGGS 12CT 4.29\nPAPER TOWELS 5.99"));
        })
        .await;
    let extraction = ctx
        .gemini
        .mock_async(|when, then| {
            when.method(POST)
                .path(MODEL_PATH)
                .body_contains("grocery bill")
                .body_contains("LG EGGS 12CT 4.29");
            then.status(200)
                .json_body(gemini_reply("['Whole Milk', 'Large Eggs']"));
        })
        .await;

    let response = ctx.server.post("/extract-items").multipart(receipt_form()).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "grocery_items": ["Whole Milk", "Large Eggs"] }));
    ocr.assert_async().await;
    extraction.assert_async().await;
}

#[test_context(ApiContext)]
#[tokio::test]
async fn extract_items_unparseable_output_is_returned(ctx: &mut ApiContext) {
    ctx.gemini
        .mock_async(|when, then| {
            when.method(POST).body_contains("Transcribe all of the text");
            then.status(200).json_body(gemini_reply("MILK 3.99"));
        })
        .await;
    ctx.gemini
        .mock_async(|when, then| {
            when.method(POST).body_contains("grocery bill");
            then.status(200)
                .json_body(gemini_reply("Here are your items: Milk"));
        })
        .await;

    let response = ctx.server.post("/extract-items").multipart(receipt_form()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({
        "error": "Failed to parse LLM response",
        "llm_output": "Here are your items: Milk"
    }));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn extract_items_upstream_failure_is_json_error(ctx: &mut ApiContext) {
    ctx.gemini
        .mock_async(|when, then| {
            when.method(POST);
            then.status(503).body("overloaded");
        })
        .await;

    let response = ctx.server.post("/extract-items").multipart(receipt_form()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("503"));
    assert!(body.get("llm_output").is_none());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn meal_plan_uses_days_to_expiry(ctx: &mut ApiContext) {
    let plan = json!({
        "monday": { "breakfast": "Oats", "lunch": "Dal", "snacks": "Fruit", "dinner": "Soup" }
    });
    let fenced = format!("```json\n{}\n```", plan);
    let mock = ctx
        .gemini
        .mock_async(|when, then| {
            when.method(POST)
                .path(MODEL_PATH)
                .body_contains("7-day meal plan")
                .body_contains(r#"{\"Milk\":3}"#)
                .body_contains("- Age: 31");
            then.status(200).json_body(gemini_reply(&fenced));
        })
        .await;

    let response = ctx
        .server
        .post("/generate-meal-plan")
        .json(&json!({
            "age": 31,
            "gender": "female",
            "diet_type": "vegetarian",
            "item_list": ["Milk"],
            "expiry_dates": { "Milk": in_days(3) }
        }))
        .await;

    response.assert_status_ok();
    response.assert_json(&plan);
    mock.assert_async().await;
}

#[test_context(ApiContext)]
#[tokio::test]
async fn meal_plan_bad_date_is_bad_request(ctx: &mut ApiContext) {
    let mock = ctx
        .gemini
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200).json_body(gemini_reply("{}"));
        })
        .await;

    let response = ctx
        .server
        .post("/generate-meal-plan")
        .json(&json!({ "expiry_dates": { "Milk": "2024/01/01" } }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "error": "time data '2024/01/01' for item 'Milk' does not match format '%Y-%m-%d'"
    }));
    mock.assert_hits_async(0).await;
}

#[test_context(ApiContext)]
#[tokio::test]
async fn meal_plan_invalid_json_hides_llm_output(ctx: &mut ApiContext) {
    ctx.gemini
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200).json_body(gemini_reply("not json at all"));
        })
        .await;

    let response = ctx
        .server
        .post("/generate-meal-plan")
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Failed to parse LLM response"));
    assert!(body.get("llm_output").is_none());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn meal_plan_malformed_body_is_bad_request(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/generate-meal-plan")
        .json(&json!({ "item_list": "Milk" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn recipe_with_empty_item_list(ctx: &mut ApiContext) {
    let recipes = json!({
        "recipes": [{
            "recipe_name": "Masala Omelette",
            "ingredients": [{ "item": "Eggs", "quantity": "2", "note": "not in item list" }],
            "instructions": ["Whisk", "Cook"]
        }]
    });
    let recipes_text = recipes.to_string();
    let mock = ctx
        .gemini
        .mock_async(|when, then| {
            when.method(POST)
                .body_contains("- Meal: Masala Omelette")
                .body_contains("- Items: []");
            then.status(200).json_body(gemini_reply(&recipes_text));
        })
        .await;

    let response = ctx
        .server
        .post("/generate-recipe")
        .json(&json!({ "meal": "Masala Omelette", "item_list": [] }))
        .await;

    response.assert_status_ok();
    response.assert_json(&recipes);
    mock.assert_async().await;
}

#[test_context(ApiContext)]
#[tokio::test]
async fn recipe_upstream_failure_is_bad_request(ctx: &mut ApiContext) {
    ctx.gemini
        .mock_async(|when, then| {
            when.method(POST);
            then.status(500).body("internal");
        })
        .await;

    let response = ctx
        .server
        .post("/generate-recipe")
        .json(&json!({ "meal": "Soup" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("LLM API returned error: 500"));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn health_allows_any_origin(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/health")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        HeaderValue::from_static("*")
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn preflight_allows_any_header_for_any_origin(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .method(Method::OPTIONS, "/generate-recipe")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            HeaderValue::from_static("x-requested-with"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        HeaderValue::from_static("*")
    );
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_HEADERS),
        HeaderValue::from_static("*")
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn openapi_document_lists_routes(ctx: &mut ApiContext) {
    let response = ctx.server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let doc: Value = response.json();
    for path in ["/extract-items", "/generate-meal-plan", "/generate-recipe", "/health"] {
        assert!(doc["paths"].get(path).is_some(), "missing {}", path);
    }
}
