use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";

#[derive(Clone, Debug)]
pub struct MealwiseConfig {
    pub llm: LLMConfig,
    pub ocr: OcrConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Ask Gemini for `application/json` constrained by a response schema.
    pub structured_output: bool,
}

#[derive(Clone, Debug)]
pub struct OcrConfig {
    pub backend: OcrBackendKind,
    pub tesseract_path: PathBuf,
    pub language: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OcrBackendKind {
    #[default]
    Tesseract,
    Gemini,
}

impl FromStr for OcrBackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tesseract" => Ok(OcrBackendKind::Tesseract),
            "gemini" => Ok(OcrBackendKind::Gemini),
            other => Err(format!(
                "unknown OCR backend '{}', expected 'tesseract' or 'gemini'",
                other
            )),
        }
    }
}

impl fmt::Display for OcrBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OcrBackendKind::Tesseract => write!(f, "tesseract"),
            OcrBackendKind::Gemini => write!(f, "gemini"),
        }
    }
}
