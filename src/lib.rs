//! cardgen: batch card artwork generation and fighting-style metadata enrichment.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    DEFAULT_OUTPUT_DIR, EnrichReport, GenerateOptions, GenerationSummary, ImageQuality, ImageSize,
    enrich, generate,
};
pub use domain::AppError;
