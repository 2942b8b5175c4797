//! Alias registration and virtual path resolution.
//!
//! This module provides the [`PathResolver`] type, the main entry point of
//! the crate. It maps alias names to ordered lists of directories and
//! answers lookups of the form `alias:relative/path` by probing those
//! directories in order.

use std::collections::BTreeMap;
use std::fmt;

use crate::base_url::{BaseUrlProvider, StaticBaseUrl};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::filesystem::{Filesystem, SystemFilesystem};
use crate::path::alias::{names_alias, sanitize, AliasName, ROOT_ALIAS};
use crate::path::normalize::{
    clean, clean_separators, has_trailing_parent, prefix, split_source, trim_leading_separators,
};
use crate::path::types::{DirectoryEntry, Mode};

/// Registry of aliases and the resolver for virtual paths built on them.
///
/// Each alias owns an ordered list of directories. Lookups probe the list
/// front to back and return the first existing match. Directory entries may
/// themselves reference other aliases (`vendor:theme`), which are resolved
/// on every lookup.
///
/// With real-path mode on (the default) every resolved directory is
/// canonicalized and directories that do not exist are dropped.
///
/// # Examples
///
/// ```
/// use vpath::filesystem::MockFilesystem;
/// use vpath::{Mode, PathResolver};
///
/// let fs = MockFilesystem::new()
///     .with_file("/site/theme/css/app.css")
///     .with_file("/site/assets/css/app.css")
///     .with_file("/site/assets/js/app.js");
///
/// let mut resolver = PathResolver::with_filesystem(fs, Some("/site")).unwrap();
/// resolver
///     .set("assets", ["/site/assets"], Mode::Append).unwrap()
///     .set("assets", ["/site/theme"], Mode::Prepend).unwrap();
///
/// assert_eq!(
///     resolver.get("assets:css/app.css").unwrap().as_deref(),
///     Some("/site/theme/css/app.css")
/// );
/// assert_eq!(
///     resolver.url("assets:js/app.js", false).unwrap().as_deref(),
///     Some("/assets/js/app.js")
/// );
/// assert_eq!(resolver.rel("assets:js/app.js").unwrap().as_deref(), Some("assets/js/app.js"));
/// ```
pub struct PathResolver<F = SystemFilesystem> {
    fs: F,
    paths: BTreeMap<String, Vec<DirectoryEntry>>,
    root: Option<String>,
    real_paths: bool,
    base_url: Box<dyn BaseUrlProvider>,
}

impl PathResolver<SystemFilesystem> {
    /// Create a resolver on the real filesystem rooted at `root`.
    ///
    /// An empty `root` falls back to the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootNotFound`] if `root` is not an existing directory.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vpath::PathResolver;
    ///
    /// let resolver = PathResolver::new("/var/www").unwrap();
    /// assert_eq!(resolver.root().unwrap(), "/var/www");
    /// ```
    pub fn new(root: &str) -> Result<Self> {
        Self::with_filesystem(SystemFilesystem, Some(root))
    }

    /// Create a resolver on the real filesystem rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootNotFound`] if the current directory cannot be used.
    pub fn with_default_root() -> Result<Self> {
        Self::with_filesystem(SystemFilesystem, None)
    }

    /// Create a resolver on the real filesystem and apply a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured root, base URL or any alias is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_filesystem_and_config(SystemFilesystem, config)
    }
}

impl<F: Filesystem> PathResolver<F> {
    /// Create a resolver over a custom filesystem backend.
    ///
    /// `None` or an empty root falls back to [`Filesystem::default_root`].
    /// If the backend has no default either, the resolver starts without a
    /// root and root-dependent operations fail with [`Error::RootNotSet`]
    /// until [`set_root`](Self::set_root) is called.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootNotFound`] if the chosen root is not a directory.
    pub fn with_filesystem(fs: F, root: Option<&str>) -> Result<Self> {
        let root = root
            .filter(|r| !r.trim().is_empty())
            .map(str::to_string)
            .or_else(|| fs.default_root());

        let mut resolver = Self {
            fs,
            paths: BTreeMap::new(),
            root: None,
            real_paths: true,
            base_url: Box::new(StaticBaseUrl::default()),
        };

        match root {
            Some(root) => {
                resolver.set_root(&root)?;
            }
            None => log::debug!("No root directory available; root stays unset"),
        }

        Ok(resolver)
    }

    /// Create a resolver over a custom backend and apply a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured root, base URL or any alias is invalid.
    pub fn with_filesystem_and_config(fs: F, config: &Config) -> Result<Self> {
        let mut resolver = Self::with_filesystem(fs, config.root.as_deref())?;
        resolver.apply_config(config)?;
        Ok(resolver)
    }

    /// Apply the scalar settings and alias registrations of a configuration.
    ///
    /// Aliases are registered in the order they appear.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured root, base URL or any alias is invalid.
    pub fn apply_config(&mut self, config: &Config) -> Result<&mut Self> {
        if let Some(root) = &config.root {
            self.set_root(root)?;
        }
        if let Some(real_paths) = config.real_paths {
            self.real_paths = real_paths;
        }
        if let Some(base_url) = &config.base_url {
            self.base_url = Box::new(StaticBaseUrl::new(base_url)?);
        }
        for alias in config.aliases.iter().flatten() {
            self.set(&alias.name, &alias.paths, alias.mode.unwrap_or_default())?;
        }
        Ok(self)
    }

    /// Replace the base URL provider used for full URLs.
    #[must_use]
    pub fn with_base_url<P: BaseUrlProvider + 'static>(mut self, provider: P) -> Self {
        self.base_url = Box::new(provider);
        self
    }

    /// Set real-path mode at construction.
    #[must_use]
    pub fn with_real_paths(mut self, enabled: bool) -> Self {
        self.real_paths = enabled;
        self
    }

    /// The filesystem backend.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Mutable access to the filesystem backend.
    pub fn fs_mut(&mut self) -> &mut F {
        &mut self.fs
    }

    /// Register one or more directories under an alias.
    ///
    /// Paths are separator-normalized, then skipped if empty or already
    /// registered. A path ending in `..` is canonicalized immediately and
    /// skipped if it does not exist. A path naming another alias is stored
    /// as a reference and resolved on every lookup.
    ///
    /// With [`Mode::Prepend`] each path goes to the front in the order
    /// given, so the last path supplied ends up searched first.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidAlias`] if the alias is shorter than two characters
    ///   after sanitization or is `root`. Nothing changes in that case.
    /// - [`Error::LoopedAlias`] if a path references the alias being set.
    ///   Paths earlier in the same call remain registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::filesystem::MockFilesystem;
    /// use vpath::{Mode, PathResolver};
    ///
    /// let fs = MockFilesystem::new().with_dir("/a").with_dir("/b").with_dir("/c");
    /// let mut resolver = PathResolver::with_filesystem(fs, Some("/")).unwrap();
    ///
    /// resolver.set("dirs", ["/a", "/b"], Mode::Prepend).unwrap();
    /// assert_eq!(resolver.get_paths("dirs").unwrap(), ["/b", "/a"]);
    ///
    /// resolver.set("dirs", ["/c"], Mode::Append).unwrap();
    /// assert_eq!(resolver.get_paths("dirs").unwrap(), ["/b", "/a", "/c"]);
    ///
    /// resolver.set("dirs", ["/c"], Mode::Reset).unwrap();
    /// assert_eq!(resolver.get_paths("dirs").unwrap(), ["/c"]);
    /// ```
    pub fn set<I, P>(&mut self, alias: &str, paths: I, mode: Mode) -> Result<&mut Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let alias = AliasName::parse(alias)?;

        let mode = if mode == Mode::Reset {
            self.paths.insert(alias.as_str().to_string(), Vec::new());
            Mode::Prepend
        } else {
            self.paths.entry(alias.as_str().to_string()).or_default();
            mode
        };

        for path in paths {
            let path = clean_separators(path.as_ref());
            if path.is_empty() || self.contains_entry(&alias, &path) {
                continue;
            }

            if alias.is_referenced_by(&path) {
                return Err(Error::LoopedAlias {
                    alias: alias.into_string(),
                    path,
                });
            }

            let Some(entry) = self.registerable(&path) else {
                log::debug!("Skipping {path} for alias {alias}: cannot be canonicalized");
                continue;
            };

            let source = entry.source();
            if source != path && self.contains_entry(&alias, &source) {
                continue;
            }

            log::trace!("Registering {source} under {alias} ({mode})");
            let list = self.paths.entry(alias.as_str().to_string()).or_default();
            match mode {
                Mode::Append => list.push(entry),
                Mode::Prepend | Mode::Reset => list.insert(0, entry),
            }
        }

        Ok(self)
    }

    /// Return the first existing file or directory matching `source`.
    ///
    /// `source` has the form `alias:relative/path`. Leading separators on
    /// the relative part are ignored and the result is lexically cleaned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootNotSet`] if `source` uses the `root` alias and no
    /// root is configured.
    pub fn get(&self, source: &str) -> Result<Option<String>> {
        self.lookup(source, &mut Vec::new())
    }

    /// Return every entry matching a glob pattern inside the alias's first directory.
    ///
    /// Only the highest-priority directory is searched. `{a,b}` groups are
    /// expanded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootNotSet`] if `source` uses the `root` alias and no
    /// root is configured.
    pub fn glob(&self, source: &str) -> Result<Vec<String>> {
        let (alias, relative) = split_source(source);
        let dirs = self.resolve_paths(alias, &mut Vec::new())?;

        let Some(first) = dirs.first() else {
            log::debug!("Alias {alias} has no directories to glob");
            return Ok(Vec::new());
        };

        let pattern = clean(&format!("{first}/{}", trim_leading_separators(relative)));
        log::trace!("Globbing {pattern}");

        Ok(self
            .fs
            .glob(&pattern)
            .into_iter()
            .filter(|path| !path.is_empty())
            .collect())
    }

    /// Return the resolved directory list of the alias named in `source`.
    ///
    /// Anything after the first `:` is ignored. Unknown aliases yield an
    /// empty list. The `root` alias yields the root directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootNotSet`] for the `root` alias when no root is
    /// configured.
    pub fn get_paths(&self, source: &str) -> Result<Vec<String>> {
        let (alias, _) = split_source(source);
        self.resolve_paths(alias, &mut Vec::new())
    }

    /// Remove directories from an alias.
    ///
    /// Each path is normalized the same way [`set`](Self::set) normalizes it
    /// before comparison. Returns `true` if at least one entry was removed.
    pub fn remove<I, P>(&mut self, from_source: &str, paths: I) -> bool
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let (alias, _) = split_source(from_source);
        let alias = sanitize(alias);
        if !self.paths.contains_key(&alias) {
            return false;
        }

        let mut removed = false;
        for path in paths {
            let Some(entry) = self.registerable(&clean_separators(path.as_ref())) else {
                continue;
            };

            let list = self.paths.entry(alias.clone()).or_default();
            if let Some(position) = list.iter().position(|existing| *existing == entry) {
                list.remove(position);
                log::trace!("Removed {entry} from {alias}");
                removed = true;
            }
        }

        removed
    }

    /// Check whether `path` is a virtual reference.
    ///
    /// A path with a colon is virtual when the part before the colon names a
    /// known alias (including `root`), or when the path has no filesystem
    /// prefix. `alias:/x` with an unknown alias is treated as a real path.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::filesystem::MockFilesystem;
    /// use vpath::{Mode, PathResolver};
    ///
    /// let fs = MockFilesystem::new().with_dir("/site");
    /// let mut resolver = PathResolver::with_filesystem(fs, Some("/site")).unwrap();
    ///
    /// assert!(resolver.is_virtual("alias:styles.css"));
    /// assert!(!resolver.is_virtual("alias:/styles.css"));
    /// assert!(!resolver.is_virtual("/site/styles.css"));
    ///
    /// resolver.set("alias", ["/site"], Mode::Prepend).unwrap();
    /// assert!(resolver.is_virtual("alias:/styles.css"));
    /// ```
    #[must_use]
    pub fn is_virtual(&self, path: &str) -> bool {
        let Some((alias, _)) = path.split_once(':') else {
            return false;
        };

        let alias = sanitize(alias);
        alias == ROOT_ALIAS || self.paths.contains_key(&alias) || prefix(path).is_none()
    }

    /// Compute the web URL of a resource.
    ///
    /// `source` is a virtual path or a real path, optionally followed by a
    /// `?query` that is carried over unchanged. The target must exist and
    /// live strictly below the root. With `full` the base URL is prepended.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootNotSet`] if no root is configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::filesystem::MockFilesystem;
    /// use vpath::{Mode, PathResolver, StaticBaseUrl};
    ///
    /// let fs = MockFilesystem::new().with_file("/site/css/app.css");
    /// let mut resolver = PathResolver::with_filesystem(fs, Some("/site"))
    ///     .unwrap()
    ///     .with_base_url(StaticBaseUrl::new("https://example.com").unwrap());
    /// resolver.set("css", ["/site/css"], Mode::Prepend).unwrap();
    ///
    /// assert_eq!(
    ///     resolver.url("css:app.css?v=2", true).unwrap().as_deref(),
    ///     Some("https://example.com/css/app.css?v=2")
    /// );
    /// assert_eq!(resolver.url("css:missing.css", false).unwrap(), None);
    /// ```
    pub fn url(&self, source: &str, full: bool) -> Result<Option<String>> {
        let root = self.root()?;

        let (path, query) = match source.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (source, None),
        };

        let Some(relative) = self.url_path(path, root)? else {
            log::debug!("No URL for {source}");
            return Ok(None);
        };

        let mut url = format!("/{relative}");
        if let Some(query) = query {
            url.push('?');
            url.push_str(query);
        }

        if full {
            url.insert_str(0, &self.base_url.current_base_url());
        }

        Ok(Some(url))
    }

    /// Resolve `source` and express the result relative to the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootNotSet`] if no root is configured.
    pub fn rel(&self, source: &str) -> Result<Option<String>> {
        let root = self.root()?;
        Ok(self
            .get(source)?
            .map(|path| self.fs.relative_to(&path, root, '/')))
    }

    /// Glob `source` and express every match relative to the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootNotSet`] if no root is configured.
    pub fn rel_glob(&self, source: &str) -> Result<Vec<String>> {
        let root = self.root()?;
        Ok(self
            .glob(source)?
            .iter()
            .map(|path| self.fs.relative_to(path, root, '/'))
            .collect())
    }

    /// Set the root directory.
    ///
    /// # Errors
    ///
    /// - [`Error::RootInvalid`] if `path` is empty.
    /// - [`Error::RootNotFound`] if `path` is not an existing directory.
    pub fn set_root(&mut self, path: &str) -> Result<&mut Self> {
        if path.trim().is_empty() {
            return Err(Error::RootInvalid);
        }

        if !self.fs.is_dir(path) {
            return Err(Error::RootNotFound {
                path: path.to_string(),
            });
        }

        let root = clean_separators(path);
        log::debug!("Root set to {root}");
        self.root = Some(root);
        Ok(self)
    }

    /// The root directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootNotSet`] if no root is configured.
    pub fn root(&self) -> Result<&str> {
        self.root.as_deref().ok_or(Error::RootNotSet)
    }

    /// Toggle real-path mode.
    pub fn set_real_path_flag(&mut self, enabled: bool) -> &mut Self {
        self.real_paths = enabled;
        self
    }

    /// Whether resolved directories are canonicalized.
    #[must_use]
    pub fn real_path_flag(&self) -> bool {
        self.real_paths
    }

    /// Registered alias names, sorted.
    pub fn aliases(&self) -> impl Iterator<Item = &str> + '_ {
        self.paths.keys().map(String::as_str)
    }

    /// Raw entries of an alias, in search order, before resolution.
    #[must_use]
    pub fn entries(&self, alias: &str) -> &[DirectoryEntry] {
        self.paths
            .get(&sanitize(alias))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `alias` has been passed to [`set`](Self::set).
    #[must_use]
    pub fn is_registered(&self, alias: &str) -> bool {
        self.paths.contains_key(&sanitize(alias))
    }

    fn contains_entry(&self, alias: &AliasName, source: &str) -> bool {
        self.paths
            .get(alias.as_str())
            .is_some_and(|list| list.iter().any(|entry| entry.source() == source))
    }

    /// Form in which a separator-normalized path is stored.
    ///
    /// Returns `None` for paths that cannot be stored.
    fn registerable(&self, path: &str) -> Option<DirectoryEntry> {
        if path.is_empty() {
            return None;
        }

        if self.is_virtual(path) || names_alias(path) {
            return Some(DirectoryEntry::virtual_ref(path));
        }

        if has_trailing_parent(path) {
            return self
                .fs
                .real_path(path)
                .map(|real| clean_separators(&real))
                .filter(|real| !real.is_empty())
                .map(DirectoryEntry::Literal);
        }

        Some(DirectoryEntry::Literal(path.to_string()))
    }

    fn lookup(&self, source: &str, visiting: &mut Vec<String>) -> Result<Option<String>> {
        let (alias, relative) = split_source(source);
        let dirs = self.resolve_paths(alias, visiting)?;
        let file = trim_leading_separators(relative);

        Ok(dirs
            .iter()
            .map(|dir| clean(&format!("{dir}/{file}")))
            .find(|candidate| self.is_present(candidate)))
    }

    /// Resolve the directory list of `alias`.
    ///
    /// `visiting` holds the aliases currently being resolved. Re-entering
    /// one of them yields nothing for that reference.
    fn resolve_paths(&self, alias: &str, visiting: &mut Vec<String>) -> Result<Vec<String>> {
        let alias = sanitize(alias);
        if alias == ROOT_ALIAS {
            return Ok(vec![self.root()?.to_string()]);
        }

        let Some(entries) = self.paths.get(&alias) else {
            return Ok(Vec::new());
        };

        if visiting.contains(&alias) {
            log::warn!("Alias reference cycle through {alias}: {}", visiting.join(" -> "));
            return Ok(Vec::new());
        }

        visiting.push(alias);
        let mut resolved = Vec::with_capacity(entries.len());

        for entry in entries {
            let path = match entry {
                DirectoryEntry::Literal(path) => Some(path.clone()),
                DirectoryEntry::Virtual { .. } => {
                    let source = entry.source();
                    let target = self.lookup(&source, visiting)?;
                    if target.is_none() {
                        log::debug!("Reference {entry} does not resolve, keeping it as written");
                    }
                    Some(target.unwrap_or(source))
                }
            };

            if let Some(path) = path.and_then(|path| self.current_path(&path)) {
                resolved.push(path);
            }
        }

        visiting.pop();
        Ok(resolved)
    }

    /// Apply real-path mode to a resolved directory.
    fn current_path(&self, path: &str) -> Option<String> {
        if self.real_paths {
            self.fs.real_path(path)
        } else {
            Some(path.to_string()).filter(|path| !path.is_empty())
        }
    }

    fn is_present(&self, path: &str) -> bool {
        self.fs.exists(path) || self.fs.is_dir(path)
    }

    /// Root-relative path of an existing target, without the leading slash.
    fn url_path(&self, path: &str, root: &str) -> Result<Option<String>> {
        let Some(entry) = self.registerable(&clean_separators(path)) else {
            return Ok(None);
        };

        let target = match entry {
            DirectoryEntry::Virtual { .. } => self.get(&entry.source())?,
            DirectoryEntry::Literal(path) => Some(clean(&path)),
        };

        let Some(target) = target.filter(|target| self.is_present(target)) else {
            return Ok(None);
        };

        let relative = strip_root(&target, root).or_else(|| {
            self.fs
                .real_path(root)
                .and_then(|real_root| strip_root(&target, &real_root))
        });

        Ok(relative.filter(|relative| !relative.is_empty()))
    }
}

impl<F> fmt::Debug for PathResolver<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathResolver")
            .field("paths", &self.paths)
            .field("root", &self.root)
            .field("real_paths", &self.real_paths)
            .field("base_url", &self.base_url.current_base_url())
            .finish_non_exhaustive()
    }
}

/// Strip `root` from the front of `path`, ignoring ASCII case.
///
/// The match must end on a segment boundary.
fn strip_root(path: &str, root: &str) -> Option<String> {
    let root = clean(root);
    let root = root.trim_end_matches('/');

    let head = path.get(..root.len())?;
    if !head.eq_ignore_ascii_case(root) {
        return None;
    }

    let rest = &path[root.len()..];
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest.trim_start_matches('/').to_string())
    } else {
        None
    }
}
