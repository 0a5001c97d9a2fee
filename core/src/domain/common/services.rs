use crate::domain::meal_planning::ports::{LLMClient, OcrEngine};

/// Process-lifetime holder for the external collaborators.
///
/// Built once at startup by [`crate::application::create_service`] and shared
/// by every request handler; it carries no per-request state.
#[derive(Clone, Debug)]
pub struct Service<O, L>
where
    O: OcrEngine,
    L: LLMClient,
{
    pub(crate) ocr_engine: O,
    pub(crate) llm_client: L,
    pub(crate) structured_output: bool,
}

impl<O, L> Service<O, L>
where
    O: OcrEngine,
    L: LLMClient,
{
    pub fn new(ocr_engine: O, llm_client: L) -> Self {
        Self {
            ocr_engine,
            llm_client,
            structured_output: false,
        }
    }

    pub fn with_structured_output(mut self, enabled: bool) -> Self {
        self.structured_output = enabled;
        self
    }
}
