//! Shared helpers for integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A folio invocation isolated from the user's config and terminal.
pub struct Folio {
    pub dir: TempDir,
}

impl Folio {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Config path inside the temp dir (not created).
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("write config");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("folio").expect("folio binary");
        cmd.env("FOLIO_CONFIG", self.config_path())
            .env("FOLIO_LOG", "warn")
            .env("NO_COLOR", "1");
        cmd
    }
}
