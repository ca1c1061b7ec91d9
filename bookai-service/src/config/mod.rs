use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default Gemini model for ebook text generation.
const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Default Imagen model for cover generation.
const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-002";

#[derive(Debug, Clone, Deserialize)]
pub struct BookaiConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub models: ModelConfig,
    pub google: GoogleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model for ebook content generation (e.g., gemini-2.5-flash)
    pub text_model: String,
    /// Model for cover image generation (e.g., imagen-3.0-generate-002)
    pub image_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    /// API credential. Absence does not fail startup: the service runs in a
    /// degraded state and every generation route reports the condition.
    pub api_key: Option<String>,
}

impl BookaiConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(BookaiConfig {
            common: common_config,
            models: ModelConfig {
                text_model: get_env_or("BOOKAI_TEXT_MODEL", DEFAULT_TEXT_MODEL),
                image_model: get_env_or("BOOKAI_IMAGE_MODEL", DEFAULT_IMAGE_MODEL),
            },
            google: GoogleConfig {
                api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            },
        })
    }
}

fn get_env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
