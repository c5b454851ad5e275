//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;

/// Mock text provider answering every prompt with a canned payload, or
/// failing every call when built with [`MockTextProvider::failing`].
pub struct MockTextProvider {
    canned: Option<String>,
}

impl MockTextProvider {
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            canned: Some(text.into()),
        }
    }

    pub fn failing() -> Self {
        Self { canned: None }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        match &self.canned {
            Some(text) => Ok(text.clone()),
            None => Err(ProviderError::NetworkError(
                "mock provider failure".to_string(),
            )),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.canned {
            Some(_) => Ok(()),
            None => Err(ProviderError::NotConfigured(
                "mock provider failure".to_string(),
            )),
        }
    }
}
