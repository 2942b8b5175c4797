//! In-memory filesystem for tests and embedders.

use std::collections::{BTreeMap, BTreeSet};

use glob::{MatchOptions, Pattern};

use super::{expand_braces, Filesystem};
use crate::path::normalize::{clean, clean_separators, prefix};

/// Maximum number of symlink hops followed before giving up.
const MAX_LINK_DEPTH: usize = 40;

/// Mock [`Filesystem`] holding a fixed set of files, directories and links.
///
/// Adding a file or directory implicitly adds all of its parent
/// directories. Paths are cleaned on the way in, so `..` segments and
/// backslashes behave as they would on disk.
///
/// # Examples
///
/// ```
/// use vpath::filesystem::{Filesystem, MockFilesystem};
///
/// let fs = MockFilesystem::new()
///     .with_file("/site/css/app.css")
///     .with_link("/www", "/site")
///     .with_current_dir("/site");
///
/// assert!(fs.exists("/www/css/app.css"));
/// assert_eq!(fs.real_path("/www/css"), Some("/site/css".to_string()));
/// assert_eq!(fs.glob("/site/*/*.css"), vec!["/site/css/app.css".to_string()]);
/// assert_eq!(fs.default_root(), Some("/site".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockFilesystem {
    files: BTreeSet<String>,
    dirs: BTreeSet<String>,
    links: BTreeMap<String, String>,
    current_dir: Option<String>,
}

impl MockFilesystem {
    /// Create an empty mock filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory (and its parents).
    #[must_use]
    pub fn with_dir(mut self, path: &str) -> Self {
        self.add_dir(path);
        self
    }

    /// Add a file (and its parent directories).
    #[must_use]
    pub fn with_file(mut self, path: &str) -> Self {
        self.add_file(path);
        self
    }

    /// Add a symlink from `link` to `target`.
    #[must_use]
    pub fn with_link(mut self, link: &str, target: &str) -> Self {
        self.add_link(link, target);
        self
    }

    /// Set the directory reported by [`Filesystem::default_root`].
    #[must_use]
    pub fn with_current_dir(mut self, path: &str) -> Self {
        let path = clean(path);
        self.add_dir(&path);
        self.current_dir = Some(path);
        self
    }

    /// Add a directory (and its parents).
    pub fn add_dir(&mut self, path: &str) {
        let path = clean(path);
        self.add_parents(&path);
        if !path.is_empty() {
            self.dirs.insert(path);
        }
    }

    /// Add a file (and its parent directories).
    pub fn add_file(&mut self, path: &str) {
        let path = clean(path);
        self.add_parents(&path);
        if !path.is_empty() {
            self.files.insert(path);
        }
    }

    /// Add a symlink from `link` to `target`.
    ///
    /// The target does not need to exist. Dangling links fail to resolve.
    pub fn add_link(&mut self, link: &str, target: &str) {
        let link = clean(link);
        self.add_parents(&link);
        self.links.insert(link, clean(target));
    }

    /// Remove a file or an empty directory.
    ///
    /// Returns `true` if something was removed.
    pub fn remove(&mut self, path: &str) -> bool {
        let path = clean(path);
        self.files.remove(&path) || self.links.remove(&path).is_some() || self.dirs.remove(&path)
    }

    fn add_parents(&mut self, path: &str) {
        let mut current = parent(path);
        while let Some(dir) = current {
            current = parent(&dir);
            self.dirs.insert(dir);
        }
    }

    /// Walk `path` one segment at a time, following links.
    ///
    /// Every segment must exist, as with a real canonicalization. A `..`
    /// applies to the already resolved prefix. Link targets are treated as
    /// absolute.
    fn resolve(&self, path: &str) -> Option<String> {
        self.resolve_with(path, &mut 0)
    }

    fn resolve_with(&self, path: &str, hops: &mut usize) -> Option<String> {
        let cleaned = clean_separators(path);
        let (head, rest) = cleaned.split_at(prefix_len(&cleaned));
        let mut current = head.to_string();

        for segment in rest.split('/') {
            match segment {
                "" | "." => {}
                ".." => match parent(&current) {
                    Some(up) => current = up,
                    None => current.truncate(prefix_len(&current)),
                },
                name => {
                    if !current.is_empty() && !current.ends_with('/') {
                        current.push('/');
                    }
                    current.push_str(name);

                    if let Some(target) = self.links.get(&current) {
                        *hops += 1;
                        if *hops > MAX_LINK_DEPTH {
                            log::debug!("Too many levels of symbolic links at {path}");
                            return None;
                        }
                        current = self.resolve_with(target, hops)?;
                    } else if !self.dirs.contains(&current) && !self.files.contains(&current) {
                        return None;
                    }
                }
            }
        }

        Some(current)
    }
}

impl Filesystem for MockFilesystem {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path)
            .is_some_and(|resolved| self.files.contains(&resolved))
    }

    fn is_dir(&self, path: &str) -> bool {
        self.resolve(path)
            .is_some_and(|resolved| self.dirs.contains(&resolved))
    }

    fn real_path(&self, path: &str) -> Option<String> {
        if path.trim().is_empty() {
            return None;
        }

        self.resolve(path)
            .filter(|resolved| self.files.contains(resolved) || self.dirs.contains(resolved))
    }

    fn glob(&self, pattern: &str) -> Vec<String> {
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        };

        let mut found = Vec::new();
        for expanded in expand_braces(pattern) {
            let compiled = match Pattern::new(&expanded) {
                Ok(compiled) => compiled,
                Err(e) => {
                    log::debug!("Invalid glob pattern {expanded}: {e}");
                    continue;
                }
            };

            found.extend(
                self.dirs
                    .union(&self.files)
                    .filter(|candidate| compiled.matches_with(candidate, options))
                    .cloned(),
            );
        }
        found
    }

    fn default_root(&self) -> Option<String> {
        self.current_dir.clone()
    }
}

fn prefix_len(path: &str) -> usize {
    prefix(path).map_or(0, |p| p.len())
}

/// Parent directory of a cleaned path, stopping at its prefix.
fn parent(path: &str) -> Option<String> {
    let boundary = prefix_len(path);
    if path.len() <= boundary {
        return None;
    }

    match path.rsplit_once('/') {
        Some((head, _)) if head.len() < boundary => Some(path[..boundary].to_string()),
        Some((head, _)) => Some(head.to_string()),
        None => None,
    }
}
