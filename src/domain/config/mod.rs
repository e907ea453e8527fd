pub mod parse;
pub mod paths;
mod settings;

pub use parse::parse_config_content;
pub use settings::{CardgenConfig, GenerationConfig, ImageApiConfig};
