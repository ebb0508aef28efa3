//! Shared testing utilities for orgcfg CLI tests.

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
    /// Create a new isolated environment with an empty `config/` directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(work_dir.join("config"))
            .expect("Failed to create test config directory");
        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `orgcfg` binary within the
    /// working directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("orgcfg").expect("Failed to locate orgcfg binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write `config/config.yaml` with the given content.
    pub fn write_config(&self, content: &str) {
        self.write_file("config/config.yaml", content);
    }

    /// Write `config/config.example.yaml` with the given content.
    pub fn write_example_config(&self, content: &str) {
        self.write_file("config/config.example.yaml", content);
    }

    /// Write a minimal `config/labels.json` so the default `labels_source`
    /// check passes.
    pub fn write_labels(&self) {
        self.write_file("config/labels.json", "[]\n");
    }

    /// Write an arbitrary file relative to the working directory.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
    }
}
