use serde::Deserialize;
use service_core::config as core_config;
use service_core::config::get_env;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct MindmeshConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub models: ModelConfig,
    pub google: GoogleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Text model used for both endpoints (e.g., gemini-2.0-flash)
    pub text_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
}

impl MindmeshConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(MindmeshConfig {
            common: common_config,
            models: ModelConfig {
                text_model: get_env("MINDMESH_TEXT_MODEL", Some("gemini-2.0-flash"), is_prod)?,
            },
            google: GoogleConfig {
                // No default in any environment: a missing key is a fatal
                // misconfiguration, not a degraded mode.
                api_key: get_env("GEMINI_API_KEY", None, is_prod)?,
            },
        })
    }
}
