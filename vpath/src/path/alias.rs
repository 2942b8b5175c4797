//! Alias names.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Minimal alias name length after sanitization.
pub const MIN_ALIAS_LENGTH: usize = 2;

/// The synthetic alias that always resolves to the configured root.
pub const ROOT_ALIAS: &str = "root";

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_.\-]").expect("alias pattern is valid"));

/// Strip every character outside `[a-zA-Z0-9_.-]`.
///
/// # Examples
///
/// ```
/// use vpath::path::alias::sanitize;
///
/// assert_eq!(sanitize("defau/lt"), "default");
/// assert_eq!(sanitize("()de~~fau+!#$lt"), "default");
/// assert_eq!(sanitize("my-theme.v2"), "my-theme.v2");
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    DISALLOWED.replace_all(raw, "").into_owned()
}

/// Check whether `path` starts with a syntactically valid alias name and a colon.
///
/// Drive letters are a single character and never qualify. This does not
/// check whether the alias is registered.
///
/// # Examples
///
/// ```
/// use vpath::path::alias::names_alias;
///
/// assert!(names_alias("vendor:/theme"));
/// assert!(names_alias("vendor:"));
/// assert!(!names_alias("C:/Windows"));
/// assert!(!names_alias("/srv/www"));
/// assert!(!names_alias("my theme:/x"));
/// ```
#[must_use]
pub fn names_alias(path: &str) -> bool {
    path.split_once(':').is_some_and(|(name, _)| {
        name.len() >= MIN_ALIAS_LENGTH && !DISALLOWED.is_match(name)
    })
}

/// A validated, registrable alias name.
///
/// # Examples
///
/// ```
/// use vpath::path::AliasName;
///
/// let alias = AliasName::parse(r"Defau\l//t").unwrap();
/// assert_eq!(alias.as_str(), "Default");
///
/// assert!(AliasName::parse("a").is_err());
/// assert!(AliasName::parse("root").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AliasName(String);

impl AliasName {
    /// Sanitize and validate an alias supplied by a caller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlias`] if fewer than [`MIN_ALIAS_LENGTH`]
    /// characters survive sanitization, or if the result is the reserved
    /// name `root`.
    pub fn parse(raw: &str) -> Result<Self> {
        let name = sanitize(raw);

        if name.len() < MIN_ALIAS_LENGTH {
            return Err(Error::InvalidAlias {
                alias: raw.to_string(),
                reason: format!("the minimum number of characters is {MIN_ALIAS_LENGTH}"),
            });
        }

        if name == ROOT_ALIAS {
            return Err(Error::InvalidAlias {
                alias: raw.to_string(),
                reason: format!("alias \"{ROOT_ALIAS}\" is predefined"),
            });
        }

        Ok(Self(name))
    }

    /// The sanitized name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the alias and return the sanitized name.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Check whether `path` textually references this alias (`alias:...`).
    ///
    /// The comparison ignores ASCII case.
    #[must_use]
    pub fn is_referenced_by(&self, path: &str) -> bool {
        let len = self.0.len();
        path.as_bytes().get(len) == Some(&b':') && path[..len].eq_ignore_ascii_case(&self.0)
    }
}

impl fmt::Display for AliasName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AliasName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
