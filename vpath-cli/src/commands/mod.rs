//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `get`: Resolve a source to an existing file or directory
//! - `glob`: Match a pattern in an alias's first directory
//! - `paths`: Show the resolved directories of an alias
//! - `url`: Build the URL of a resource
//! - `rel`: Resolve a source relative to the root
//! - `clean`: Lexically normalize a path
//! - `validate`: Validate configuration file
//! - `completions`: Generate shell completion scripts

pub mod clean;
pub mod completions;
pub mod get;
pub mod glob;
pub mod paths;
pub mod rel;
pub mod url;
pub mod validate;

pub use clean::CleanCommand;
pub use completions::CompletionsCommand;
pub use get::GetCommand;
pub use glob::GlobCommand;
pub use paths::PathsCommand;
pub use rel::RelCommand;
pub use url::UrlCommand;
pub use validate::ValidateCommand;
