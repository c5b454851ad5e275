//! The relay pipeline: one generation call, one parse step.
//!
//! Transport failures and malformed model output stay distinguishable
//! here for diagnostics; handlers collapse both to a generic response.

use super::prompts;
use super::providers::{ProviderError, TextProvider};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Model output is not valid JSON: {0}")]
    MalformedOutput(#[from] serde_json::Error),
}

/// Ask the capability to organize `text`; return its reply parsed as JSON.
pub async fn organize(provider: &dyn TextProvider, text: &str) -> Result<Value, RelayError> {
    let prompt = prompts::organize(text);
    let raw = provider.generate(&prompt).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// Ask the capability for a mind-map over `structured`; return its reply
/// parsed as JSON.
pub async fn mindmap(provider: &dyn TextProvider, structured: &Value) -> Result<Value, RelayError> {
    let prompt = prompts::mindmap(structured);
    let raw = provider.generate(&prompt).await?;
    Ok(serde_json::from_str(&raw)?)
}
