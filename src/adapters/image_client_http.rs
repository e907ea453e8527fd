//! Image generation API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, EncodedImage, ImageApiConfig};
use crate::ports::{ImageClient, ImageRequest};

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
const RESPONSE_FORMAT: &str = "b64_json";
const DEFAULT_STATUS_MESSAGE: &str = "Image API request failed";

/// HTTP transport for the image generation API.
///
/// One request per call; failures are returned to the caller as-is.
#[derive(Clone)]
pub struct HttpImageClient {
    api_key: String,
    api_url: Url,
    model: String,
    client: Client,
}

impl std::fmt::Debug for HttpImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpImageClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpImageClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &ImageApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::ImageApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_key, api_url: config.api_url.clone(), model: config.model.clone(), client })
    }

    fn send_request(&self, request: &ApiRequest<'_>) -> Result<EncodedImage, AppError> {
        log::debug!("POST {} (model={}, size={})", self.api_url, request.model, request.size);

        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::ImageApi {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ApiResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::ImageApi {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            let payload = api_response
                .data
                .into_iter()
                .next()
                .and_then(|image| image.b64_json)
                .ok_or_else(|| AppError::ImageApi {
                    message: "No image data in response".into(),
                    status: Some(status.as_u16()),
                })?;

            return Ok(EncodedImage::new(payload));
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::ImageApi { message, status: Some(status.as_u16()) })
    }
}

/// Read the API credential, rejecting unset or blank values.
pub fn api_key_from_env() -> Result<String, AppError> {
    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| AppError::EnvironmentVariableMissing(API_KEY_ENV.into()))
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
    quality: &'a str,
    n: u8,
    response_format: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    data: Vec<ApiImage>,
}

#[derive(Debug, Deserialize)]
struct ApiImage {
    #[serde(default)]
    b64_json: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl ImageClient for HttpImageClient {
    fn generate(&self, request: &ImageRequest) -> Result<EncodedImage, AppError> {
        let api_request = ApiRequest {
            model: &self.model,
            prompt: &request.prompt,
            size: request.size.as_str(),
            quality: request.quality.as_str(),
            n: 1,
            response_format: RESPONSE_FORMAT,
        };

        self.send_request(&api_request)
    }
}
