use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Top-level configuration read from `cardgen.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardgenConfig {
    /// Image API configuration.
    #[serde(default)]
    pub image_api: ImageApiConfig,
    /// Generation loop configuration.
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl CardgenConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.image_api.validate()?;
        Ok(())
    }
}

/// Image API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageApiConfig {
    /// Image generation endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with each request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ImageApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout() }
    }
}

impl ImageApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Generation loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Pause after each generated image, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { delay_ms: default_delay_ms() }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/images/generations")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "dall-e-3".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_delay_ms() -> u64 {
    1000
}
