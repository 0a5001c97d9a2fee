use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use mealwise_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, LLMConfig, MealwiseConfig, OcrBackendKind,
    OcrConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "mealwise-api", version, about = "Receipt to meal plan API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub ocr: OcrArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list; `*` allows any origin.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', default_value = "*")]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "MAX_IMAGE_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_image_bytes: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long, env = "GEMINI_STRUCTURED_OUTPUT", default_value_t = false)]
    pub gemini_structured_output: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct OcrArgs {
    #[arg(long, env = "OCR_BACKEND", default_value = "tesseract")]
    pub ocr_backend: OcrBackendKind,

    #[arg(long, env = "TESSERACT_PATH", default_value = "tesseract")]
    pub tesseract_path: PathBuf,

    #[arg(long, env = "OCR_LANGUAGE", default_value = "eng")]
    pub ocr_language: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for MealwiseConfig {
    fn from(args: Args) -> Self {
        MealwiseConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                structured_output: args.llm.gemini_structured_output,
            },
            ocr: OcrConfig {
                backend: args.ocr.ocr_backend,
                tesseract_path: args.ocr.tesseract_path,
                language: args.ocr.ocr_language,
            },
        }
    }
}
