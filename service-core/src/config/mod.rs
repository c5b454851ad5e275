use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

/// Settings common to the whole service.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    5000
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Read an environment variable, falling back to `default` outside prod.
/// A variable with no default is required everywhere.
pub fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_env_prefers_the_environment() {
        env::set_var("CORE_CONFIG_TEST_KEY", "from-env");
        let value = get_env("CORE_CONFIG_TEST_KEY", Some("fallback"), false).unwrap();
        assert_eq!(value, "from-env");
        env::remove_var("CORE_CONFIG_TEST_KEY");
    }

    #[test]
    fn get_env_without_default_fails_when_unset() {
        env::remove_var("CORE_CONFIG_MISSING_KEY");
        assert!(get_env("CORE_CONFIG_MISSING_KEY", None, false).is_err());
    }

    #[test]
    fn get_env_default_is_ignored_in_prod() {
        env::remove_var("CORE_CONFIG_PROD_KEY");
        assert!(get_env("CORE_CONFIG_PROD_KEY", Some("fallback"), true).is_err());
    }
}
