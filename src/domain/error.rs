use std::io;

use thiserror::Error;

/// Library-wide error type for cardgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' not set. Set it with: export {0}='your-api-key'")]
    EnvironmentVariableMissing(String),

    /// Config file passed explicitly does not exist.
    #[error("Config file not found: {0}")]
    ConfigFileNotFound(String),

    /// Config value failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Prompt manifest file does not exist.
    #[error("File {0} not found")]
    ManifestNotFound(String),

    /// Prompt manifest is not valid JSON.
    #[error("Could not parse {path} as JSON: {details}")]
    ManifestParse { path: String, details: String },

    /// Prompt manifest lacks the top-level prompt array.
    #[error("JSON file does not have '{key}' key")]
    ManifestMissingKey { key: String },

    /// Image generation API failure.
    #[error("Image API error{}: {message}", .status.map(|s| format!(" ({})", s)).unwrap_or_default())]
    ImageApi { message: String, status: Option<u16> },

    /// Returned image payload could not be decoded.
    #[error("Failed to decode image payload: {0}")]
    ImageDecode(String),

    /// Style document has an unexpected shape.
    #[error("Invalid style document {path}: {details}")]
    StyleDocument { path: String, details: String },

    /// JSON (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that branch on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::ManifestParse { .. }
            | AppError::ManifestMissingKey { .. }
            | AppError::ImageDecode(_)
            | AppError::StyleDocument { .. }
            | AppError::Json(_) => io::ErrorKind::InvalidInput,
            AppError::EnvironmentVariableMissing(_)
            | AppError::ConfigFileNotFound(_)
            | AppError::ManifestNotFound(_) => io::ErrorKind::NotFound,
            AppError::ImageApi { .. } => io::ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_api_error_includes_status_when_present() {
        let err = AppError::ImageApi { message: "Rate limited".into(), status: Some(429) };
        assert_eq!(err.to_string(), "Image API error (429): Rate limited");

        let err = AppError::ImageApi { message: "connection refused".into(), status: None };
        assert_eq!(err.to_string(), "Image API error: connection refused");
    }

    #[test]
    fn missing_credential_maps_to_not_found() {
        let err = AppError::EnvironmentVariableMissing("OPENAI_API_KEY".into());
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }
}
