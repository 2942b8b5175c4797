//! Named resolver instances.
//!
//! Applications that need several independent alias tables (one per theme,
//! tenant or package set) keep them in a [`ResolverRegistry`] and pass it
//! around explicitly.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::filesystem::{Filesystem, SystemFilesystem};
use crate::path::PathResolver;

/// Name under which callers conventionally store their main resolver.
pub const DEFAULT_INSTANCE: &str = "default";

/// A keyed collection of [`PathResolver`] instances.
///
/// # Examples
///
/// ```
/// use vpath::filesystem::MockFilesystem;
/// use vpath::{Mode, PathResolver, ResolverRegistry};
///
/// let fs = MockFilesystem::new().with_dir("/site/assets");
/// let mut registry = ResolverRegistry::new();
///
/// let resolver = registry
///     .get_or_try_insert_with("default", || PathResolver::with_filesystem(fs, Some("/site")))
///     .unwrap();
/// resolver.set("assets", ["/site/assets"], Mode::Prepend).unwrap();
///
/// assert!(registry.contains("default"));
/// assert_eq!(
///     registry.get("default").unwrap().get_paths("assets").unwrap(),
///     ["/site/assets"]
/// );
/// ```
#[derive(Debug)]
pub struct ResolverRegistry<F = SystemFilesystem> {
    instances: BTreeMap<String, PathResolver<F>>,
}

impl<F> Default for ResolverRegistry<F> {
    fn default() -> Self {
        Self {
            instances: BTreeMap::new(),
        }
    }
}

impl<F: Filesystem> ResolverRegistry<F> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a resolver, returning the one it replaces.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        resolver: PathResolver<F>,
    ) -> Option<PathResolver<F>> {
        self.instances.insert(name.into(), resolver)
    }

    /// Borrow a resolver by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PathResolver<F>> {
        self.instances.get(name)
    }

    /// Mutably borrow a resolver by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut PathResolver<F>> {
        self.instances.get_mut(name)
    }

    /// Return the named resolver, creating it with `create` if absent.
    ///
    /// # Errors
    ///
    /// Returns the error from `create`. Nothing is stored in that case.
    pub fn get_or_try_insert_with<C>(&mut self, name: &str, create: C) -> Result<&mut PathResolver<F>>
    where
        C: FnOnce() -> Result<PathResolver<F>>,
    {
        match self.instances.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                log::debug!("Creating resolver instance {name}");
                Ok(entry.insert(create()?))
            }
        }
    }

    /// Remove a resolver, returning it.
    pub fn remove(&mut self, name: &str) -> Option<PathResolver<F>> {
        self.instances.remove(name)
    }

    /// Whether a resolver is stored under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.instances.contains_key(name)
    }

    /// Stored instance names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.instances.keys().map(String::as_str)
    }

    /// Number of stored resolvers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
