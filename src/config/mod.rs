#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, Messages};
use crate::utils::error::{CartError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_PATH: &str = "./cart-storage.json";
pub const DEFAULT_NAMESPACE: &str = "@cart-sync";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Fully resolved settings: built-in defaults, then the TOML file, then
/// command line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSettings {
    pub api_base_url: String,
    pub storage_path: String,
    pub namespace: String,
    pub timeout_seconds: u64,
    pub log_level: Option<String>,
    pub json_logs: bool,
    pub messages: Messages,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            storage_path: DEFAULT_STORAGE_PATH.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            log_level: None,
            json_logs: false,
            messages: Messages::default(),
        }
    }
}

impl ConfigProvider for CartSettings {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn storage_path(&self) -> &str {
        &self.storage_path
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn messages(&self) -> Messages {
        self.messages.clone()
    }
}

impl Validate for CartSettings {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api_base_url)?;
        validate_path("storage.path", &self.storage_path)?;
        validate_non_empty_string("storage.namespace", &self.namespace)?;
        validate_range("api.timeout_seconds", self.timeout_seconds, 1, 300)?;

        if let Some(level) = self.log_level.as_deref() {
            if !LOG_LEVELS.contains(&level) {
                return Err(CartError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}
