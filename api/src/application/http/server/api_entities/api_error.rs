use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mealwise_core::domain::common::entities::app_errors::CoreError;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

pub const LLM_PARSE_FAILURE: &str = "Failed to parse LLM response";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    InternalServerError(String),

    /// The model answered, but not in the expected shape. The raw answer is
    /// returned to the caller for diagnosis.
    #[error("{message}")]
    LlmOutputRejected { message: String, llm_output: String },
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_output: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalServerError(_) | ApiError::LlmOutputRejected { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::LlmOutputRejected {
                message,
                llm_output,
            } => ApiErrorResponse {
                error: message,
                llm_output: Some(llm_output),
            },
            other => ApiErrorResponse {
                error: other.to_string(),
                llm_output: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// How an endpoint turns a [`CoreError`] into an HTTP error.
///
/// Receipt extraction exposes the raw model output when it cannot be parsed;
/// the JSON endpoints report every failure as a plain 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    AttachLlmOutput,
    CatchAllBadRequest,
}

impl ErrorPolicy {
    pub fn to_api_error(self, error: CoreError) -> ApiError {
        match self {
            ErrorPolicy::CatchAllBadRequest => ApiError::BadRequest(error.to_string()),
            ErrorPolicy::AttachLlmOutput => match error {
                CoreError::ResponseParse { raw_output, .. } => ApiError::LlmOutputRejected {
                    message: LLM_PARSE_FAILURE.to_string(),
                    llm_output: raw_output,
                },
                CoreError::InputMissing(_) | CoreError::InvalidImage(_) => {
                    ApiError::BadRequest(error.to_string())
                }
                other => ApiError::InternalServerError(other.to_string()),
            },
        }
    }
}

/// JSON body extractor that also runs `validator` rules. Rejections become
/// `400 {"error": ...}` instead of axum's plain-text bodies.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}
