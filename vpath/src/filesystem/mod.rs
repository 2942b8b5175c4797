//! Filesystem access used by the resolver.
//!
//! The resolver never touches `std::fs` directly. Every probe goes through
//! the [`Filesystem`] trait so that embedders can supply their own backend
//! and tests can run against the in-memory [`MockFilesystem`].
//!
//! All paths crossing this boundary are strings with forward slashes.

pub mod brace;
pub mod mock;
pub mod system;

pub use brace::expand_braces;
pub use mock::MockFilesystem;
pub use system::SystemFilesystem;

use crate::path::normalize::clean_separators;

/// Filesystem queries the resolver depends on.
///
/// # Examples
///
/// ```
/// use vpath::filesystem::{Filesystem, MockFilesystem};
///
/// let fs = MockFilesystem::new().with_file("/srv/www/index.html");
///
/// assert!(fs.exists("/srv/www/index.html"));
/// assert!(fs.is_dir("/srv/www"));
/// assert_eq!(fs.real_path("/srv/www/../www"), Some("/srv/www".to_string()));
/// assert_eq!(fs.relative_to("/srv/www/index.html", "/srv", '/'), "www/index.html");
/// ```
pub trait Filesystem: Send + Sync {
    /// Whether a regular file is present at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Whether a directory is present at `path`.
    fn is_dir(&self, path: &str) -> bool;

    /// Canonical form of `path` with symlinks, `.` and `..` resolved.
    ///
    /// Returns `None` if the path does not exist.
    fn real_path(&self, path: &str) -> Option<String>;

    /// Expand a shell glob pattern, including `{a,b}` brace groups.
    ///
    /// Returns an empty list when nothing matches or the pattern is invalid.
    fn glob(&self, pattern: &str) -> Vec<String>;

    /// Express `path` relative to `base`, joined with `separator`.
    ///
    /// Both paths are canonicalized when they exist, so a symlinked base
    /// still matches. The default implementation is built on
    /// [`real_path`](Self::real_path).
    fn relative_to(&self, path: &str, base: &str, separator: char) -> String {
        let path = self
            .real_path(path)
            .unwrap_or_else(|| clean_separators(path));
        let base = self
            .real_path(base)
            .unwrap_or_else(|| clean_separators(base));
        strip_base(&path, &base, separator)
    }

    /// The natural root directory of the process, if there is one.
    fn default_root(&self) -> Option<String>;
}

/// Remove `base` from the front of `path` and rejoin the rest with `separator`.
fn strip_base(path: &str, base: &str, separator: char) -> String {
    let rest = if base.is_empty() {
        path
    } else {
        path.strip_prefix(base).unwrap_or(path)
    };

    let rest = rest.trim_start_matches('/');
    if separator == '/' {
        rest.to_string()
    } else {
        rest.replace('/', &separator.to_string())
    }
}
