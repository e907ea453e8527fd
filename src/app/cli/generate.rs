//! Generate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::domain::{AppError, ImageQuality, ImageSize};
use crate::{DEFAULT_OUTPUT_DIR, GenerateOptions};

#[derive(Args)]
pub struct GenerateArgs {
    /// Input JSON file with image prompts
    #[arg(short, long)]
    input: PathBuf,
    /// Output directory for images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,
    /// Image size: square, landscape, or portrait
    #[arg(short, long, default_value = "square")]
    size: ImageSize,
    /// Image quality: standard or hd
    #[arg(short, long, default_value = "standard")]
    quality: ImageQuality,
    /// Limit number of images to generate (for testing)
    #[arg(short, long)]
    limit: Option<usize>,
    /// Overwrite existing images
    #[arg(long)]
    overwrite: bool,
    /// Pause after each generated image in milliseconds (overrides config)
    #[arg(long)]
    delay_ms: Option<u64>,
    /// Config file (defaults to ./cardgen.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

pub fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let options = GenerateOptions {
        input: args.input,
        output_dir: args.output,
        size: args.size,
        quality: args.quality,
        limit: args.limit,
        overwrite: args.overwrite,
        delay_ms: args.delay_ms,
        config: args.config,
    };

    let Some(summary) = crate::app::api::generate(&options)? else {
        return Ok(());
    };

    println!(
        "\nGeneration complete! Successfully generated {} out of {} images.",
        summary.generated, summary.total
    );
    if summary.failed > 0 {
        println!("⚠️  {} image(s) failed", summary.failed);
    }
    println!("Images saved to: {}", summary.output_dir.display());
    Ok(())
}
