//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `VPATH_*` environment variables that
//! override configuration file values.

use std::env;
use std::path::Path;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::normalize::{clean_separators, expand_tilde};

/// Root directory override.
pub const ENV_ROOT: &str = "VPATH_ROOT";

/// Real-path mode override.
pub const ENV_REAL_PATHS: &str = "VPATH_REAL_PATHS";

/// Base URL override.
pub const ENV_BASE_URL: &str = "VPATH_BASE_URL";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use vpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `VPATH_REAL_PATHS` is not a boolean or
    /// `VPATH_ROOT` cannot be tilde-expanded.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(root) = Self::var(ENV_ROOT) {
            let expanded = expand_tilde(Path::new(&root))?;
            config.root = Some(clean_separators(&expanded.to_string_lossy()));
        }

        if let Some(val) = Self::var(ENV_REAL_PATHS) {
            config.real_paths = Some(Self::parse_bool(ENV_REAL_PATHS, &val)?);
        }

        if let Some(url) = Self::var(ENV_BASE_URL) {
            config.base_url = Some(url);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming `field` for any other value.
    pub fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
