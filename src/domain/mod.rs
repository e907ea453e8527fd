pub mod config;
pub mod enrich;
pub mod error;
pub mod generation;
pub mod image_options;
pub mod manifest;
pub mod style_metadata;

pub use config::{CardgenConfig, GenerationConfig, ImageApiConfig};
pub use enrich::{EnrichChanges, enrich_styles};
pub use error::AppError;
pub use generation::{EncodedImage, GenerationOutcome, GenerationSummary, SkipReason};
pub use image_options::{ImageQuality, ImageSize};
pub use manifest::{ManifestEntry, PromptManifest, parse_manifest_content};
pub use style_metadata::{STYLE_METADATA, StyleColor, StyleMetadata};
