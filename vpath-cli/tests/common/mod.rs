//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated working and home directory
//! - Command builder helpers with `VPATH_*` variables cleared
//! - Fixture helpers for populating the working directory

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test.
const VPATH_VARS: &[&str] = &[
    "VPATH_ROOT",
    "VPATH_REAL_PATHS",
    "VPATH_BASE_URL",
    "VPATH_CONFIG",
    "VPATH_LOG_MODE",
];

/// Isolated test environment.
///
/// The working directory is a canonicalized temporary directory, and `HOME`
/// points at an empty directory inside it so no user configuration is read.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the working directory, with forward slashes
    pub root: String,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = fs::canonicalize(temp_dir.path())
            .expect("Failed to canonicalize temp dir")
            .to_string_lossy()
            .replace('\\', "/");
        fs::create_dir_all(Path::new(&root).join("home")).expect("Failed to create home dir");

        Self { temp_dir, root }
    }

    /// Get a command builder running inside the environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("vpath").expect("Failed to find vpath binary");
        cmd.current_dir(&self.root)
            .env("HOME", self.path("home"))
            .env("USERPROFILE", self.path("home"));
        for var in VPATH_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Absolute path of `relative` inside the environment.
    pub fn path(&self, relative: &str) -> String {
        format!("{}/{relative}", self.root)
    }

    /// Create a directory (and parents) and return its absolute path.
    pub fn create_dir(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file (and parents) and return its absolute path.
    pub fn create_file(&self, relative: &str, contents: &str) -> String {
        let path = self.path(relative);
        if let Some(parent) = Path::new(&path).parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}
