//! Configuration system for vpath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of alias names, roots and base URLs
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`VPATH_*`)
//! 3. Explicit configuration file (via `ConfigBuilder::with_config_file`)
//! 4. Private project config (`vpath.local.yaml`)
//! 5. Project config (`vpath.yaml`)
//! 6. User config (`~/.vpath/config.yaml`)
//! 7. Built-in defaults
//!
//! Scalars from a higher source replace lower ones. Alias registrations
//! from every source are kept and applied from lowest to highest, so with
//! the default prepend mode the directories of higher sources are searched
//! first.
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use vpath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use vpath::config::{AliasConfig, Config, ConfigBuilder};
//!
//! let custom = Config {
//!     root: Some("/srv/www".to_string()),
//!     aliases: Some(vec![AliasConfig::new("assets", vec!["/srv/www/assets".to_string()])]),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.aliases.unwrap()[0].name, "assets");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{AliasConfig, Config};
pub use validator::ConfigValidator;
