//! Imagen cover-image provider.
//!
//! Requests exactly one JPEG at a 3:4 (book cover) aspect ratio through the
//! `predict` endpoint and returns the image's base64 payload untouched.

use super::{ImageProvider, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const IMAGEN_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Output format requested for every cover.
const OUTPUT_MIME_TYPE: &str = "image/jpeg";

/// Imagen provider configuration.
#[derive(Debug, Clone)]
pub struct ImagenConfig {
    pub api_key: String,
    pub model: String,
}

/// Imagen image provider.
pub struct ImagenImageProvider {
    config: ImagenConfig,
    client: Client,
}

impl ImagenImageProvider {
    pub fn new(config: ImagenConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:predict?key={}",
            IMAGEN_API_BASE, self.config.model, self.config.api_key
        )
    }
}

#[async_trait]
impl ImageProvider for ImagenImageProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = PredictRequest {
            instances: vec![Instance {
                prompt: prompt.to_string(),
            }],
            parameters: Parameters {
                sample_count: 1,
                aspect_ratio: "3:4".to_string(),
                output_mime_type: OUTPUT_MIME_TYPE.to_string(),
            },
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Imagen API"
        );

        let response = self
            .client
            .post(self.api_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError(format!(
                "Imagen API error {}: {}",
                status, error_text
            )));
        }

        let api_response: PredictResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        extract_image(api_response)
    }
}

/// Pull the base64 payload of the first generated image out of a parsed
/// Imagen response.
fn extract_image(response: PredictResponse) -> Result<String, ProviderError> {
    response
        .predictions
        .into_iter()
        .next()
        .map(|p| p.bytes_base64_encoded)
        .ok_or_else(|| {
            ProviderError::ApiError("response contained no generated images".to_string())
        })
}

// ============================================================================
// Imagen API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<Instance>,
    parameters: Parameters,
}

#[derive(Debug, Serialize)]
struct Instance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    sample_count: u32,
    aspect_ratio: String,
    output_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: String,
}
