//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::domain::config::{self, paths};
use crate::domain::{AppError, CardgenConfig};

/// Load `cardgen.toml`.
///
/// An explicit path must exist. Without one, `cardgen.toml` in `root` is used
/// when present and built-in defaults otherwise.
pub fn load_config(explicit: Option<&Path>, root: &Path) -> Result<CardgenConfig, AppError> {
    let config_path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigFileNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = paths::default_config(root);
            if !candidate.is_file() {
                log::debug!("No {} found; using defaults", paths::DEFAULT_CONFIG_FILE);
                return Ok(CardgenConfig::default());
            }
            candidate
        }
    };

    log::debug!("Loading config from {}", config_path.display());
    let content = fs::read_to_string(&config_path)?;
    config::parse_config_content(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_file_present() {
        let dir = TempDir::new().unwrap();
        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config.generation.delay_ms, 1000);
    }

    #[test]
    fn reads_default_file_from_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cardgen.toml"), "[generation]\ndelay_ms = 5\n").unwrap();

        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config.generation.delay_ms, 5);
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");

        let err = load_config(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, AppError::ConfigFileNotFound(_)));
    }

    #[test]
    fn explicit_path_wins_over_default_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cardgen.toml"), "[generation]\ndelay_ms = 5\n").unwrap();
        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "[image_api]\nmodel = \"dall-e-2\"\n").unwrap();

        let config = load_config(Some(&explicit), dir.path()).unwrap();
        assert_eq!(config.image_api.model, "dall-e-2");
        assert_eq!(config.generation.delay_ms, 1000);
    }
}
