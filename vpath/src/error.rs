//! Error types for the vpath library.
//!
//! Configuration and programmer mistakes (bad alias names, bad roots, bad
//! config files) are reported through [`Error`]. A lookup that simply finds
//! nothing is not an error: resolution methods return `None` or an empty list.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a vpath error.
///
/// # Examples
///
/// ```
/// use vpath::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("assets")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the vpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// An alias name is too short after sanitization, or is reserved.
    #[error("invalid alias '{alias}': {reason}")]
    InvalidAlias {
        /// The alias as supplied by the caller.
        alias: String,
        /// The reason the alias was rejected.
        reason: String,
    },

    /// A registered path references its own alias and would recurse forever.
    #[error("looped path '{path}' for alias '{alias}'")]
    LoopedAlias {
        /// The sanitized alias being registered.
        alias: String,
        /// The offending path.
        path: String,
    },

    /// An empty root directory was supplied.
    #[error("root directory must not be empty")]
    RootInvalid,

    /// The root directory does not exist.
    #[error("root directory not found: {path}")]
    RootNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A root-dependent operation ran before a root was configured.
    #[error("root directory is not set")]
    RootNotSet,

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A base URL could not be parsed or is not usable as a URL root.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// The reason the URL was rejected.
        reason: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error concerns the root directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::Error;
    ///
    /// assert!(Error::RootNotSet.is_root_error());
    /// assert!(!Error::RootNotSet.is_alias_error());
    /// ```
    #[must_use]
    pub fn is_root_error(&self) -> bool {
        matches!(
            self,
            Self::RootInvalid | Self::RootNotFound { .. } | Self::RootNotSet
        )
    }

    /// Check if the error was caused by an alias registration.
    #[must_use]
    pub fn is_alias_error(&self) -> bool {
        matches!(self, Self::InvalidAlias { .. } | Self::LoopedAlias { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_alias_error() {
        let err = Error::InvalidAlias {
            alias: "a".to_string(),
            reason: "the minimum number of characters is 2".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid alias"));
        assert!(display.contains("'a'"));
        assert!(display.contains("minimum"));
        assert!(err.is_alias_error());
    }

    #[test]
    fn test_looped_alias_error() {
        let err = Error::LoopedAlias {
            alias: "theme".to_string(),
            path: "theme:sub".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("looped path"));
        assert!(display.contains("theme:sub"));
        assert!(err.is_alias_error());
        assert!(!err.is_root_error());
    }

    #[test]
    fn test_root_errors() {
        assert!(Error::RootInvalid.is_root_error());
        assert!(Error::RootNotSet.is_root_error());

        let err = Error::RootNotFound {
            path: "/missing/dir".to_string(),
        };
        assert!(err.is_root_error());
        assert!(format!("{err}").contains("/missing/dir"));
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/path"),
            reason: "does not exist".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/invalid/path"));
        assert!(display.contains("does not exist"));
    }

    #[test]
    fn test_invalid_url_error() {
        let err = Error::InvalidUrl {
            url: "ftp://files".to_string(),
            reason: "unsupported scheme".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid base URL"));
        assert!(display.contains("ftp://files"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "aliases[0].name".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("aliases[0].name"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<()> {
            Err(Error::RootNotSet)
        }

        assert!(returns_result().is_err());
    }
}
