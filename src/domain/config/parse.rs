//! Pure parse/validate for `cardgen.toml`.

use crate::domain::{AppError, CardgenConfig};

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<CardgenConfig, AppError> {
    let config: CardgenConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
