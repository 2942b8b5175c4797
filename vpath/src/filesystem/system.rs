//! The real filesystem backend.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use glob::MatchOptions;

use super::{expand_braces, Filesystem};
use crate::path::normalize::clean_separators;

/// [`Filesystem`] backed by `std::fs` and the `glob` crate.
///
/// # Examples
///
/// ```no_run
/// use vpath::filesystem::{Filesystem, SystemFilesystem};
///
/// let fs = SystemFilesystem;
/// let canonical = fs.real_path("/tmp/../tmp").unwrap();
/// assert!(fs.is_dir(&canonical));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFilesystem;

impl Filesystem for SystemFilesystem {
    fn exists(&self, path: &str) -> bool {
        !path.is_empty() && Path::new(path).is_file()
    }

    fn is_dir(&self, path: &str) -> bool {
        !path.is_empty() && Path::new(path).is_dir()
    }

    fn real_path(&self, path: &str) -> Option<String> {
        if path.is_empty() {
            return None;
        }

        match canonicalize(Path::new(path)) {
            Ok(canonical) => Some(to_slash(&canonical)),
            Err(e) => {
                log::trace!("Cannot canonicalize {path}: {e}");
                None
            }
        }
    }

    fn glob(&self, pattern: &str) -> Vec<String> {
        expand_braces(pattern)
            .iter()
            .flat_map(|expanded| glob_one(expanded))
            .collect()
    }

    fn default_root(&self) -> Option<String> {
        match env::current_dir() {
            Ok(dir) => Some(to_slash(&dir)),
            Err(e) => {
                log::debug!("Current directory is unavailable: {e}");
                None
            }
        }
    }
}

/// Canonicalize an existing path, following every symlink.
///
/// # Errors
///
/// Returns the underlying I/O error if the path does not exist or cannot be
/// read.
fn canonicalize(path: &Path) -> std::io::Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| {
        if e.kind() == ErrorKind::PermissionDenied {
            log::debug!("Permission denied while canonicalizing {}", path.display());
        }
        e
    })
}

/// Render a path with forward slashes and without the Windows verbatim prefix.
fn to_slash(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let raw = if let Some(unc) = raw.strip_prefix(r"\\?\UNC\") {
        format!(r"\\{unc}")
    } else {
        raw.strip_prefix(r"\\?\").unwrap_or(&raw).to_string()
    };
    clean_separators(&raw)
}

/// Glob a single brace-free pattern.
fn glob_one(pattern: &str) -> Vec<String> {
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    match glob::glob_with(pattern, options) {
        Ok(paths) => paths
            .filter_map(|entry| match entry {
                Ok(path) => Some(to_slash(&path)),
                Err(e) => {
                    log::debug!("Skipping unreadable glob match: {e}");
                    None
                }
            })
            .filter(|path| !path.is_empty())
            .collect(),
        Err(e) => {
            log::debug!("Invalid glob pattern {pattern}: {e}");
            Vec::new()
        }
    }
}
