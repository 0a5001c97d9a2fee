use crate::{
    domain::common::{MealwiseConfig, services::Service},
    infrastructure::{llm::GeminiLLMClient, ocr::OcrBackend},
};

pub type MealwiseService = Service<OcrBackend, GeminiLLMClient>;

pub fn create_service(config: MealwiseConfig) -> MealwiseService {
    let llm_client = GeminiLLMClient::from_config(&config.llm);
    let ocr_engine = OcrBackend::from_config(&config.ocr, &llm_client);

    tracing::info!(
        model = %config.llm.gemini_model,
        ocr_backend = %config.ocr.backend,
        structured_output = config.llm.structured_output,
        "meal planning service configured"
    );

    Service::new(ocr_engine, llm_client).with_structured_output(config.llm.structured_output)
}
