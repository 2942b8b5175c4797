//! Common test utilities for integration tests.
//!
//! This module provides a throwaway directory tree on the real filesystem
//! and helpers for populating it.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use vpath::PathResolver;

/// A temporary site directory whose canonical path serves as the root.
///
/// The directory is removed when the fixture is dropped.
pub struct Site {
    _dir: TempDir,
    root: String,
}

#[allow(dead_code)]
impl Site {
    /// Create an empty site.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temporary directory");
        let root = slash(&fs::canonicalize(dir.path()).expect("failed to canonicalize tempdir"));
        Self { _dir: dir, root }
    }

    /// The canonical root directory.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Absolute path of `relative` inside the site, without touching disk.
    pub fn path(&self, relative: &str) -> String {
        format!("{}/{relative}", self.root)
    }

    /// Create a directory (and parents) and return its absolute path.
    pub fn dir(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::create_dir_all(&path).expect("failed to create directory");
        path
    }

    /// Create a file with some content (and its parents) and return its absolute path.
    pub fn file(&self, relative: &str) -> String {
        let path = self.path(relative);
        if let Some(parent) = Path::new(&path).parent() {
            fs::create_dir_all(parent).expect("failed to create parent directory");
        }
        fs::write(&path, relative).expect("failed to write file");
        path
    }

    /// A resolver on the real filesystem rooted at this site.
    pub fn resolver(&self) -> PathResolver {
        PathResolver::new(&self.root).expect("failed to create resolver")
    }
}

/// Render a path with forward slashes.
pub fn slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
