//! Common test utilities for Splitter integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Catalog used by most tests
#[allow(dead_code)]
pub const BONES_CATALOG: &str = r"
items:
  - name: Bones
    price: 90
  - name: Dragon bones
    price: 2400
    wiki_price: 2450
  - name: Big bones
    price: 260
  - name: Abyssal whip
    price: 1500000
";

/// A scratch directory holding config and catalog files
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace and return its path
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write `items.yaml` with the bones catalog
    #[allow(dead_code)]
    pub fn write_bones_catalog(&self) -> PathBuf {
        self.write_file("items.yaml", BONES_CATALOG)
    }

    /// Command running the real binary, isolated from the user's environment
    pub fn splitter_cmd(&self) -> Command {
        splitter_cmd_in(&self.path)
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command running the real binary with `home` as both home and config dir
#[allow(deprecated)]
pub fn splitter_cmd_in(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("splitter").expect("splitter binary should be built");
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("SPLITTER_CONFIG")
        .env_remove("SPLITTER_CATALOG")
        .env_remove("SPLITTER_LOG");
    cmd
}
