use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        meal_planning::{
            ports::{LLMClient, OcrEngine},
            value_objects::ReceiptImage,
        },
    },
    infrastructure::llm::GeminiLLMClient,
};

const TRANSCRIBE_PROMPT: &str = "Transcribe all of the text printed on this receipt, line by line, \
exactly as it appears. Return only the transcribed text.";

/// OCR through Gemini's vision input, for hosts without a tesseract install.
#[derive(Debug, Clone)]
pub struct GeminiVisionOcr {
    client: GeminiLLMClient,
}

impl GeminiVisionOcr {
    pub fn new(client: GeminiLLMClient) -> Self {
        Self { client }
    }
}

impl OcrEngine for GeminiVisionOcr {
    async fn extract_text(&self, image: &ReceiptImage) -> Result<String, CoreError> {
        self.client
            .generate_with_image(TRANSCRIBE_PROMPT.to_string(), image)
            .await
            .map_err(|e| CoreError::OcrFailure(e.to_string()))
    }
}
