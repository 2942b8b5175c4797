//! Configuration schema definitions.
//!
//! This module defines the structure of vpath configuration files using
//! serde for YAML serialization and deserialization.

use serde::{Deserialize, Serialize};

use crate::path::Mode;

/// Complete vpath configuration.
///
/// Every field is optional so that several sources can be layered.
///
/// # Examples
///
/// ```
/// use vpath::config::Config;
///
/// let yaml = r#"
/// root: /srv/www
/// real_paths: false
/// aliases:
///   - name: assets
///     paths: [/srv/www/pkgA, /srv/www/pkgB]
///     mode: append
/// "#;
///
/// let config: Config = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.root.as_deref(), Some("/srv/www"));
/// assert_eq!(config.aliases.unwrap()[0].paths.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root directory for relative paths and URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    /// Whether resolved directories are canonicalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_paths: Option<bool>,

    /// Base URL prepended to full URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Alias registrations, applied in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<AliasConfig>>,
}

/// One alias registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasConfig {
    /// Alias name.
    pub name: String,

    /// Directories or alias references to register.
    #[serde(default)]
    pub paths: Vec<String>,

    /// Registration mode. Defaults to prepend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
}

impl AliasConfig {
    /// Create a prepend registration.
    #[must_use]
    pub fn new(name: impl Into<String>, paths: Vec<String>) -> Self {
        Self {
            name: name.into(),
            paths,
            mode: None,
        }
    }

    /// Set the registration mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }
}
