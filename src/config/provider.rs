use crate::utils::error::{MandiError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Connection settings for the generative-language provider.
///
/// Loaded from a TOML file or assembled from defaults plus the
/// `GEMINI_API_KEY` environment variable. The endpoint is overridable so
/// tests can point the adapter at a mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "api_key_from_env")]
    pub api_key: String,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn api_key_from_env() -> String {
    std::env::var(API_KEY_ENV).unwrap_or_default()
}

fn default_timeout() -> u64 {
    30
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    512
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: api_key_from_env(),
            timeout_seconds: default_timeout(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

impl ProviderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let config: ProviderConfig =
            toml::from_str(&content).map_err(|e| MandiError::ConfigError {
                message: format!(
                    "Failed to parse config file {}: {}",
                    path.as_ref().display(),
                    e
                ),
            })?;
        Ok(config)
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;

        if self.model.trim().is_empty() {
            return Err(MandiError::MissingConfigError {
                field: "model".to_string(),
            });
        }
        if self.api_key.trim().is_empty() {
            return Err(MandiError::MissingConfigError {
                field: format!("api_key (set {} or use a config file)", API_KEY_ENV),
            });
        }

        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        validate_range("temperature", self.temperature, 0.0, 2.0)?;
        validate_range("max_output_tokens", self.max_output_tokens, 1, 8192)?;
        Ok(())
    }
}
