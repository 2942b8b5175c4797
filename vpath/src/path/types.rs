//! Core types for alias registration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A directory registered under an alias.
///
/// Entries are either literal directories or references to another alias
/// (`other:subpath`). References are resolved lazily on every lookup so that
/// later registrations on the referenced alias are picked up.
///
/// # Examples
///
/// ```
/// use vpath::path::DirectoryEntry;
///
/// let literal = DirectoryEntry::Literal("/srv/www/assets".to_string());
/// assert!(!literal.is_virtual());
///
/// let reference = DirectoryEntry::virtual_ref("vendor:theme/assets");
/// assert!(reference.is_virtual());
/// assert_eq!(reference.to_string(), "vendor:theme/assets");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DirectoryEntry {
    /// A separator-normalized directory path.
    Literal(String),

    /// A reference to a path inside another alias.
    Virtual {
        /// The referenced alias, as written.
        alias: String,
        /// The path inside the referenced alias.
        subpath: String,
    },
}

impl DirectoryEntry {
    /// Build a reference entry by splitting `source` on its first `:`.
    ///
    /// A source without a colon references the alias itself.
    #[must_use]
    pub fn virtual_ref(source: &str) -> Self {
        let (alias, subpath) = source.split_once(':').unwrap_or((source, ""));
        Self::Virtual {
            alias: alias.to_string(),
            subpath: subpath.to_string(),
        }
    }

    /// Whether this entry references another alias.
    #[must_use]
    pub fn is_virtual(&self) -> bool {
        matches!(self, Self::Virtual { .. })
    }

    /// The stored string form, used for duplicate detection and removal.
    #[must_use]
    pub fn source(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(path) => f.write_str(path),
            Self::Virtual { alias, subpath } => write!(f, "{alias}:{subpath}"),
        }
    }
}

/// How `set` combines new paths with an alias's existing list.
///
/// # Examples
///
/// ```
/// use vpath::path::Mode;
///
/// assert_eq!(Mode::default(), Mode::Prepend);
/// assert_eq!("APPEND".parse::<Mode>().unwrap(), Mode::Append);
/// assert_eq!(Mode::Reset.to_string(), "reset");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Insert each new path at the front of the list (searched first).
    #[default]
    Prepend,
    /// Insert each new path at the back of the list (searched last).
    Append,
    /// Clear the list, then prepend.
    Reset,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prepend => write!(f, "prepend"),
            Self::Append => write!(f, "append"),
            Self::Reset => write!(f, "reset"),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "prepend" => Ok(Self::Prepend),
            "append" => Ok(Self::Append),
            "reset" => Ok(Self::Reset),
            _ => Err(Error::Validation {
                field: "mode".into(),
                message: format!("invalid mode '{s}' (expected prepend/append/reset)"),
            }),
        }
    }
}
