//! Enrich command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_enrich(input: PathBuf, output: Option<PathBuf>) -> Result<(), AppError> {
    let report = crate::app::api::enrich(&input, output.as_deref())?;
    println!("✅ Updated JSON saved to {}", report.output_path.display());
    Ok(())
}
