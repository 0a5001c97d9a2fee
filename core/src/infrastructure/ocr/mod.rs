pub mod gemini_vision;
pub mod tesseract;

pub use gemini_vision::GeminiVisionOcr;
pub use tesseract::TesseractOcr;

use crate::{
    domain::{
        common::{OcrBackendKind, OcrConfig, entities::app_errors::CoreError},
        meal_planning::{ports::OcrEngine, value_objects::ReceiptImage},
    },
    infrastructure::llm::GeminiLLMClient,
};

/// OCR engine picked at startup from configuration.
#[derive(Debug, Clone)]
pub enum OcrBackend {
    Tesseract(TesseractOcr),
    Gemini(GeminiVisionOcr),
}

impl OcrBackend {
    pub fn from_config(config: &OcrConfig, llm_client: &GeminiLLMClient) -> Self {
        match config.backend {
            OcrBackendKind::Tesseract => OcrBackend::Tesseract(TesseractOcr::new(
                config.tesseract_path.clone(),
                config.language.clone(),
            )),
            OcrBackendKind::Gemini => OcrBackend::Gemini(GeminiVisionOcr::new(llm_client.clone())),
        }
    }
}

impl OcrEngine for OcrBackend {
    async fn extract_text(&self, image: &ReceiptImage) -> Result<String, CoreError> {
        match self {
            OcrBackend::Tesseract(engine) => engine.extract_text(image).await,
            OcrBackend::Gemini(engine) => engine.extract_text(image).await,
        }
    }
}
