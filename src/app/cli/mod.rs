//! CLI Adapter.

mod enrich;
mod generate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "cardgen")]
#[command(version)]
#[command(
    about = "Generate card artwork from prompt manifests and enrich card style metadata",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one image per manifest entry via the image API
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Add icon and color metadata to a fighting-style JSON document
    #[clap(visible_alias = "e")]
    Enrich {
        /// Style document to enrich
        input: PathBuf,
        /// Write here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate(args) => generate::run_generate(args),
        Commands::Enrich { input, output } => enrich::run_enrich(input, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
