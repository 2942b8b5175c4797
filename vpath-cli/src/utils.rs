//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, resolver construction, and output
//! formatting.

use crate::error::CliError;
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use vpath::config::AliasConfig;
use vpath::{prefix, Config, ConfigBuilder, PathResolver};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Additional configuration file.
    pub config: Option<PathBuf>,

    /// Root directory override.
    pub root: Option<String>,

    /// Aliases registered on the command line, in order.
    pub aliases: Vec<AliasArg>,

    /// Disable canonicalization of resolved directories.
    pub no_real_paths: bool,

    /// Base URL override.
    pub base_url: Option<String>,
}

/// A `NAME=PATH` alias registration from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasArg {
    /// Alias name.
    pub name: String,
    /// Directory or reference registered under the alias.
    pub path: String,
}

impl FromStr for AliasArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, path) = s
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=PATH, got '{s}'"))?;

        if name.trim().is_empty() || path.trim().is_empty() {
            return Err(format!("expected NAME=PATH, got '{s}'"));
        }

        Ok(Self {
            name: name.trim().to_string(),
            path: path.trim().to_string(),
        })
    }
}

impl AliasArg {
    fn to_config(&self, cwd: &Path) -> AliasConfig {
        AliasConfig::new(self.name.clone(), vec![absolutize(&self.path, cwd)])
    }
}

/// Make a plain relative path absolute against `cwd`.
///
/// Absolute paths and alias references are returned unchanged.
pub fn absolutize(path: &str, cwd: &Path) -> String {
    if path.contains(':') || prefix(path).is_some() {
        return path.to_string();
    }
    cwd.join(path).to_string_lossy().into_owned()
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. Discovered configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let cwd = env::current_dir()?;
    let mut builder = ConfigBuilder::new().with_working_dir(&cwd);

    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    let aliases: Vec<AliasConfig> = global
        .aliases
        .iter()
        .map(|alias| alias.to_config(&cwd))
        .collect();

    let overrides = Config {
        root: global.root.as_deref().map(|root| absolutize(root, &cwd)),
        real_paths: global.no_real_paths.then_some(false),
        base_url: global.base_url.clone(),
        aliases: (!aliases.is_empty()).then_some(aliases),
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build a resolver on the real filesystem from the merged configuration.
pub fn build_resolver(global: &GlobalOptions) -> Result<PathResolver, CliError> {
    let config = load_configuration(global)?;
    log::debug!("Building resolver from {config:?}");
    PathResolver::from_config(&config).map_err(CliError::from)
}

/// Print a list of strings, one per line or as a JSON array.
pub fn print_list<T: Serialize + AsRef<str>>(items: &[T], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{}", item.as_ref());
        }
    }
    Ok(())
}
