//! Image generation API port definition.

use crate::domain::{AppError, EncodedImage, ImageQuality, ImageSize};

/// Request for a single generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Free-text prompt describing the image.
    pub prompt: String,
    pub size: ImageSize,
    pub quality: ImageQuality,
}

/// Port for image generation operations.
pub trait ImageClient {
    /// Generate one image and return its base64 payload.
    fn generate(&self, request: &ImageRequest) -> Result<EncodedImage, AppError>;
}
