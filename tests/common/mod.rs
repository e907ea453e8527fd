//! Shared testing utilities for cardgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `cardgen` binary within the work directory.
    ///
    /// `OPENAI_API_KEY` is set to a dummy value; tests exercising its absence remove it.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("cardgen").expect("Failed to locate cardgen binary");
        cmd.current_dir(self.work_dir())
            .env("OPENAI_API_KEY", "test-key")
            .env("HOME", self.root.path())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the work directory, creating parents.
    pub fn write_file(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the work directory.
    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read test file")
    }

    /// Read raw bytes relative to the work directory.
    pub fn read_bytes(&self, relative: &str) -> Vec<u8> {
        fs::read(self.work_dir.join(relative)).expect("Failed to read test file")
    }

    /// Point the image API at `api_url` with no post-success delay.
    pub fn write_config(&self, api_url: &str) -> PathBuf {
        self.write_file(
            "cardgen.toml",
            format!(
                "[image_api]\napi_url = \"{}\"\ntimeout_secs = 5\n\n[generation]\ndelay_ms = 0\n",
                api_url
            ),
        )
    }

    /// Write a prompt manifest to `prompts.json`.
    pub fn write_manifest(&self, content: &str) -> PathBuf {
        self.write_file("prompts.json", content)
    }

    /// Assert that a generated image exists in the default output directory.
    pub fn assert_image_exists(&self, card_id: &str) {
        let path = self.work_dir.join("card_images").join(format!("{}.jpg", card_id));
        assert!(path.exists(), "image should exist at {}", path.display());
    }
}
