//! Generation outcomes and output naming.

use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::domain::AppError;

/// File extension for written images.
pub const IMAGE_EXTENSION: &str = "jpg";

/// Base64 image payload as returned by the image API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub fn new(b64: impl Into<String>) -> Self {
        Self(b64.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the payload into raw image bytes.
    pub fn decode(&self) -> Result<Vec<u8>, AppError> {
        STANDARD.decode(self.0.trim()).map_err(|e| AppError::ImageDecode(e.to_string()))
    }
}

/// Whether a card identifier can be used verbatim as a file stem.
pub fn is_safe_card_id(card_id: &str) -> bool {
    !card_id.is_empty()
        && !card_id.starts_with('.')
        && !card_id.contains(['/', '\\', '\0'])
}

/// Deterministic output path for a card identifier.
pub fn image_path(output_dir: &Path, card_id: &str) -> PathBuf {
    output_dir.join(format!("{}.{}", card_id, IMAGE_EXTENSION))
}

/// Why an entry was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingFields,
    UnsafeCardId(String),
    AlreadyExists(String),
}

/// Per-entry result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated { card_id: String, path: PathBuf },
    Skipped { position: usize, reason: SkipReason },
    Failed { card_id: String, message: String },
}

/// Aggregate counts for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Entries considered after the limit was applied.
    pub total: usize,
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub output_dir: PathBuf,
    pub outcomes: Vec<GenerationOutcome>,
}

impl GenerationSummary {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { total: 0, generated: 0, skipped: 0, failed: 0, output_dir, outcomes: Vec::new() }
    }

    pub fn record(&mut self, outcome: GenerationOutcome) {
        match outcome {
            GenerationOutcome::Generated { .. } => self.generated += 1,
            GenerationOutcome::Skipped { .. } => self.skipped += 1,
            GenerationOutcome::Failed { .. } => self.failed += 1,
        }
        self.outcomes.push(outcome);
    }
}
