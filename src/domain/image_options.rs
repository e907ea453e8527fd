use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Output dimensions requested from the image API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    #[default]
    Square,
    Landscape,
    Portrait,
}

impl ImageSize {
    /// Dimension string understood by the image API.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::Square => "1024x1024",
            ImageSize::Landscape => "1792x1024",
            ImageSize::Portrait => "1024x1792",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImageSize::Square => "square",
            ImageSize::Landscape => "landscape",
            ImageSize::Portrait => "portrait",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ImageSize {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" | "1024x1024" => Ok(ImageSize::Square),
            "landscape" | "1792x1024" => Ok(ImageSize::Landscape),
            "portrait" | "1024x1792" => Ok(ImageSize::Portrait),
            _ => Err(AppError::config_error(format!(
                "Invalid image size '{}'. Expected 'square', 'landscape', or 'portrait'.",
                s
            ))),
        }
    }
}

/// Rendering quality requested from the image API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageQuality {
    #[default]
    Standard,
    High,
}

impl ImageQuality {
    /// Quality string understood by the image API.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageQuality::Standard => "standard",
            ImageQuality::High => "hd",
        }
    }
}

impl fmt::Display for ImageQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageQuality {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(ImageQuality::Standard),
            "hd" | "high" => Ok(ImageQuality::High),
            _ => Err(AppError::config_error(format!(
                "Invalid image quality '{}'. Expected 'standard' or 'hd'.",
                s
            ))),
        }
    }
}
