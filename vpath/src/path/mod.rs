//! Virtual path handling.
//!
//! This module provides the alias table and everything it needs:
//!
//! - **Alias names**: validation and sanitization of `name:` prefixes
//! - **Normalization**: lexical cleanup of separators and `.`/`..` segments
//! - **Resolution**: mapping `alias:sub/path` sources to real locations
//!
//! # Sources
//!
//! A source is either a plain filesystem path or `alias:sub/path`. Each alias
//! owns an ordered list of directories; lookups try them front to back and
//! the first existing candidate wins. Directories may themselves be virtual
//! (`other:sub`), in which case they are expanded lazily at lookup time.
//!
//! # Examples
//!
//! ```
//! use vpath::filesystem::MockFilesystem;
//! use vpath::path::{Mode, PathResolver};
//!
//! let fs = MockFilesystem::new()
//!     .with_file("/site/theme/logo.png")
//!     .with_file("/site/custom/logo.png");
//! let mut resolver = PathResolver::with_filesystem(fs, Some("/site")).unwrap();
//!
//! resolver.set("img", ["/site/theme"], Mode::Prepend).unwrap();
//! resolver.set("img", ["/site/custom"], Mode::Prepend).unwrap();
//!
//! // The most recently prepended directory shadows the earlier one.
//! assert_eq!(
//!     resolver.get("img:logo.png").unwrap().as_deref(),
//!     Some("/site/custom/logo.png")
//! );
//! ```

pub mod alias;
pub mod normalize;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use alias::AliasName;
pub use resolver::PathResolver;
pub use types::{DirectoryEntry, Mode};
