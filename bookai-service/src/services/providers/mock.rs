//! Mock provider implementations for testing.
//!
//! Mocks record every prompt they receive so tests can assert both on the
//! instruction string the handlers build and on the absence of upstream
//! calls when validation rejects a request first.

use super::{ImageProvider, ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock text provider for testing.
pub struct MockTextProvider {
    reply: Result<String, String>,
    calls: Mutex<Vec<String>>,
}

impl MockTextProvider {
    /// Provider that answers every prompt with the given text.
    pub fn with_reply(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Provider that fails every call with an API error.
    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }
}

/// Mock image provider for testing.
pub struct MockImageProvider {
    payload: Result<String, String>,
    calls: Mutex<Vec<String>>,
}

impl MockImageProvider {
    /// Provider that answers every prompt with the given base64 payload.
    pub fn with_payload(payload: &str) -> Self {
        Self {
            payload: Ok(payload.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Provider that fails every call with an API error.
    pub fn failing(message: &str) -> Self {
        Self {
            payload: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        match &self.payload {
            Ok(payload) => Ok(payload.clone()),
            Err(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }
}
