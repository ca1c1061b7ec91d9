//! AI provider abstractions and implementations.
//!
//! Trait-based so the Gemini/Imagen backends can be swapped for mocks in
//! tests. Each call is a single synchronous request from the service's
//! viewpoint: no retry, no streaming, no cancellation hook.

pub mod gemini;
pub mod imagen;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a text reply for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Trait for image generation providers (e.g., Imagen).
///
/// The returned payload is the image's base64 text exactly as the upstream
/// produced it; this service never decodes it.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Generate a single image for the given prompt, returning its base64
    /// payload.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
