//! Batch image generation from a prompt manifest.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::domain::generation::{image_path, is_safe_card_id};
use crate::domain::{
    AppError, GenerationOutcome, GenerationSummary, ImageQuality, ImageSize, ManifestEntry,
    PromptManifest, SkipReason, parse_manifest_content,
};
use crate::ports::{ImageClient, ImageRequest};

/// Default directory for generated images.
pub const DEFAULT_OUTPUT_DIR: &str = "card_images";

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Prompt manifest path.
    pub input: PathBuf,
    /// Directory receiving `<cardID>.jpg` files.
    pub output_dir: PathBuf,
    pub size: ImageSize,
    pub quality: ImageQuality,
    /// Only process the first N entries.
    pub limit: Option<usize>,
    /// Replace images that already exist.
    pub overwrite: bool,
    /// Pause after each generated image; overrides the config value.
    pub delay_ms: Option<u64>,
    /// Explicit config file.
    pub config: Option<PathBuf>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            size: ImageSize::default(),
            quality: ImageQuality::default(),
            limit: None,
            overwrite: false,
            delay_ms: None,
            config: None,
        }
    }
}

/// Load the prompt manifest from disk.
pub fn load_manifest(path: &Path) -> Result<PromptManifest, AppError> {
    if !path.is_file() {
        return Err(AppError::ManifestNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    parse_manifest_content(&path.display().to_string(), &content)
}

/// Run generation for every manifest entry using `client`.
///
/// Returns `None` when the manifest holds no prompts; nothing is created then.
pub fn execute<C: ImageClient + ?Sized>(
    options: &GenerateOptions,
    client: &C,
    delay: Duration,
) -> Result<Option<GenerationSummary>, AppError> {
    let mut manifest = load_manifest(&options.input)?;
    if manifest.is_empty() {
        println!("No image prompts found in {}", options.input.display());
        return Ok(None);
    }

    fs::create_dir_all(&options.output_dir)?;
    println!("Images will be saved to: {}", options.output_dir.display());

    if let Some(limit) = options.limit {
        manifest.truncate(limit);
    }

    let output_dir =
        fs::canonicalize(&options.output_dir).unwrap_or_else(|_| options.output_dir.clone());
    let mut summary = GenerationSummary::new(output_dir);
    summary.total = manifest.len();

    for entry in manifest.entries() {
        let outcome = process_entry(entry, options, client);
        let generated = matches!(outcome, GenerationOutcome::Generated { .. });
        summary.record(outcome);

        if generated && !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    Ok(Some(summary))
}

fn process_entry<C: ImageClient + ?Sized>(
    entry: &ManifestEntry,
    options: &GenerateOptions,
    client: &C,
) -> GenerationOutcome {
    let Some((card_id, prompt)) = entry.fields() else {
        println!("Skipping item {} - missing cardID or prompt", entry.position);
        return GenerationOutcome::Skipped {
            position: entry.position,
            reason: SkipReason::MissingFields,
        };
    };

    if !is_safe_card_id(card_id) {
        println!(
            "Skipping item {} - cardID '{}' is not a valid file name",
            entry.position, card_id
        );
        return GenerationOutcome::Skipped {
            position: entry.position,
            reason: SkipReason::UnsafeCardId(card_id.to_string()),
        };
    }

    let path = image_path(&options.output_dir, card_id);
    if path.exists() && !options.overwrite {
        println!("Skipping {} - image already exists", card_id);
        return GenerationOutcome::Skipped {
            position: entry.position,
            reason: SkipReason::AlreadyExists(card_id.to_string()),
        };
    }

    println!("Generating image for {}...", card_id);
    let request =
        ImageRequest { prompt: prompt.to_string(), size: options.size, quality: options.quality };

    match generate_to_file(client, &request, &path) {
        Ok(bytes) => {
            log::debug!("Wrote {} bytes to {}", bytes, path.display());
            println!("Saved image: {}", path.display());
            GenerationOutcome::Generated { card_id: card_id.to_string(), path }
        }
        Err(e) => {
            eprintln!("Error generating image for {}: {}", card_id, e);
            GenerationOutcome::Failed { card_id: card_id.to_string(), message: e.to_string() }
        }
    }
}

fn generate_to_file<C: ImageClient + ?Sized>(
    client: &C,
    request: &ImageRequest,
    path: &Path,
) -> Result<usize, AppError> {
    let image = client.generate(request)?;
    let bytes = image.decode()?;
    fs::write(path, &bytes)?;
    Ok(bytes.len())
}
