#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # vpath
//!
//! A library for virtual path aliases.
//!
//! An alias such as `assets:` stands for an ordered list of directories.
//! Sources like `assets:css/site.css` are resolved against that list, first
//! hit wins, and can be turned into root-relative paths or URLs.
//!
//! ## Core Types
//!
//! - [`PathResolver`]: The alias table and every lookup operation
//! - [`Mode`] and [`DirectoryEntry`]: How directories are registered and stored
//! - [`Filesystem`]: The probe seam, with [`SystemFilesystem`] and [`MockFilesystem`]
//! - [`Config`] and [`ConfigBuilder`]: Layered YAML and environment configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use vpath::{Mode, MockFilesystem, PathResolver};
//!
//! let fs = MockFilesystem::new()
//!     .with_file("/srv/www/vendor/lib/app.js")
//!     .with_dir("/srv/www/public");
//! let mut resolver = PathResolver::with_filesystem(fs, Some("/srv/www")).unwrap();
//!
//! resolver
//!     .set("js", ["/srv/www/public", "/srv/www/vendor/lib"], Mode::Append)
//!     .unwrap();
//!
//! assert_eq!(
//!     resolver.get("js:app.js").unwrap().as_deref(),
//!     Some("/srv/www/vendor/lib/app.js")
//! );
//! assert_eq!(
//!     resolver.rel("js:app.js").unwrap().as_deref(),
//!     Some("vendor/lib/app.js")
//! );
//! ```

pub mod base_url;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod logging;
pub mod path;
pub mod registry;

// Re-export key types at crate root for convenience
pub use base_url::{BaseUrlProvider, StaticBaseUrl};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use filesystem::{Filesystem, MockFilesystem, SystemFilesystem};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::normalize::{clean, prefix};
pub use path::{AliasName, DirectoryEntry, Mode, PathResolver};
pub use registry::{ResolverRegistry, DEFAULT_INSTANCE};
