//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources,
//! with special handling for the accumulated `aliases` list.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use vpath::config::{Config, ConfigMerger};
///
/// let low = Config { root: Some("/low".to_string()), ..Default::default() };
/// let high = Config { root: Some("/high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.root, Some("/high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            log::debug!(
                "Merging configuration from {} (precedence {})",
                source.path.display(),
                source.precedence
            );
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Scalars (`root`, `real_paths`, `base_url`): source overwrites if Some
    /// - Aliases: source registrations are appended after the target's, so
    ///   they are applied later and, with the default prepend mode, are
    ///   searched first
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.root.is_some() {
            target.root.clone_from(&source.root);
        }

        if source.real_paths.is_some() {
            target.real_paths = source.real_paths;
        }

        if source.base_url.is_some() {
            target.base_url.clone_from(&source.base_url);
        }

        if let Some(ref source_aliases) = source.aliases {
            match &mut target.aliases {
                Some(target_aliases) => target_aliases.extend(source_aliases.iter().cloned()),
                None => target.aliases.clone_from(&source.aliases),
            }
        }
    }
}
