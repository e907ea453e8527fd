use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "cardgen.toml";

/// `<root>/cardgen.toml`
pub fn default_config(root: &Path) -> PathBuf {
    root.join(DEFAULT_CONFIG_FILE)
}
