use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    InputMissing(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("time data '{value}' for item '{item}' does not match format '%Y-%m-%d'")]
    DateParse { item: String, value: String },

    #[error("{message}")]
    ResponseParse { message: String, raw_output: String },

    #[error("Missing prompt variable '{0}'")]
    MissingPromptVariable(String),

    #[error("OCR failed: {0}")]
    OcrFailure(String),

    #[error("{0}")]
    ExternalServiceError(String),
}

impl CoreError {
    /// Raw model text attached to a parse failure, if any.
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            CoreError::ResponseParse { raw_output, .. } => Some(raw_output),
            _ => None,
        }
    }
}
