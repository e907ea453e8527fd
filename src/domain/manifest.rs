//! Prompt manifest model and parsing.

use serde_json::Value;

use crate::domain::AppError;

/// Top-level key holding the prompt entries.
pub const PROMPTS_KEY: &str = "imagePrompts";
const CARD_ID_KEY: &str = "cardID";
const PROMPT_KEY: &str = "prompt";

/// One identifier/prompt pair from the manifest.
///
/// Fields are optional because malformed entries are skipped at generation
/// time rather than rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// 1-based position in the manifest.
    pub position: usize,
    pub card_id: Option<String>,
    pub prompt: Option<String>,
}

impl ManifestEntry {
    /// Returns identifier and prompt when both are present and non-empty.
    pub fn fields(&self) -> Option<(&str, &str)> {
        match (self.card_id.as_deref(), self.prompt.as_deref()) {
            (Some(id), Some(prompt)) => Some((id, prompt)),
            _ => None,
        }
    }

    fn from_value(position: usize, value: &Value) -> Self {
        Self {
            position,
            card_id: non_empty_str(value, CARD_ID_KEY),
            prompt: non_empty_str(value, PROMPT_KEY),
        }
    }
}

fn non_empty_str(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty()).map(ToOwned::to_owned)
}

/// Ordered list of manifest entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptManifest {
    entries: Vec<ManifestEntry>,
}

impl PromptManifest {
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Keep only the first `limit` entries.
    pub fn truncate(&mut self, limit: usize) {
        self.entries.truncate(limit);
    }
}

/// Parse manifest JSON content. `source` names the file in error messages.
pub fn parse_manifest_content(source: &str, content: &str) -> Result<PromptManifest, AppError> {
    let document: Value = serde_json::from_str(content).map_err(|e| AppError::ManifestParse {
        path: source.to_string(),
        details: e.to_string(),
    })?;

    let prompts = document
        .get(PROMPTS_KEY)
        .ok_or_else(|| AppError::ManifestMissingKey { key: PROMPTS_KEY.to_string() })?;

    let items = prompts.as_array().ok_or_else(|| AppError::ManifestParse {
        path: source.to_string(),
        details: format!("'{}' must be an array", PROMPTS_KEY),
    })?;

    let entries =
        items.iter().enumerate().map(|(i, item)| ManifestEntry::from_value(i + 1, item)).collect();

    Ok(PromptManifest { entries })
}
