//! Style document enrichment.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::{AppError, enrich_styles};

/// Result of enriching a style document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichReport {
    pub output_path: PathBuf,
    pub enriched: Vec<String>,
    /// Names left unmodified, with a warning printed for each.
    pub unmatched: Vec<String>,
}

/// Enrich `input` and write it to `output`, or back to `input` when `output` is `None`.
pub fn execute(input: &Path, output: Option<&Path>) -> Result<EnrichReport, AppError> {
    let output_path = output.unwrap_or(input).to_path_buf();

    let content = fs::read_to_string(input)?;
    let mut document: Value = serde_json::from_str(&content)?;
    let styles = document.as_object_mut().ok_or_else(|| AppError::StyleDocument {
        path: input.display().to_string(),
        details: "top-level value must be an object keyed by style name".to_string(),
    })?;

    let changes = enrich_styles(styles);
    for name in &changes.unmatched {
        eprintln!("Warning: No metadata defined for style '{}'", name);
    }
    for name in &changes.not_objects {
        eprintln!("Warning: Style '{}' is not an object; left unchanged", name);
    }
    log::debug!("Enriched {} of {} styles", changes.enriched.len(), styles.len());

    let rendered = serde_json::to_string_pretty(&document)?;
    fs::write(&output_path, rendered)?;

    let mut unmatched = changes.unmatched;
    unmatched.extend(changes.not_objects);
    Ok(EnrichReport { output_path, enriched: changes.enriched, unmatched })
}
