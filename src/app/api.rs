//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration,
//! adapters, and command execution.

use std::path::Path;
use std::time::Duration;

use crate::adapters::HttpImageClient;
use crate::adapters::image_client_http::api_key_from_env;
use crate::app::commands;
use crate::app::config::load_config;

pub use crate::app::commands::enrich::EnrichReport;
pub use crate::app::commands::generate::{DEFAULT_OUTPUT_DIR, GenerateOptions};
pub use crate::domain::{AppError, GenerationSummary, ImageQuality, ImageSize};

/// Generate images for every entry in the manifest named by `options.input`.
///
/// Requires `OPENAI_API_KEY`; its absence is reported before the manifest
/// is read. Returns `None` when the manifest holds no prompts.
pub fn generate(options: &GenerateOptions) -> Result<Option<GenerationSummary>, AppError> {
    let api_key = api_key_from_env()?;

    let cwd = std::env::current_dir()?;
    let config = load_config(options.config.as_deref(), &cwd)?;
    let delay_ms = options.delay_ms.unwrap_or(config.generation.delay_ms);

    let client = HttpImageClient::new(api_key, &config.image_api)?;
    log::debug!("Using {:?} with delay {}ms", client, delay_ms);

    commands::generate::execute(options, &client, Duration::from_millis(delay_ms))
}

/// Add icon and color metadata to the style document at `input`.
///
/// Writes to `output` when given, otherwise overwrites `input`.
pub fn enrich(input: &Path, output: Option<&Path>) -> Result<EnrichReport, AppError> {
    commands::enrich::execute(input, output)
}
