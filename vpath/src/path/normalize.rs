//! Path string normalization.
//!
//! All functions here are lexical: they never touch the filesystem. They
//! operate on strings with forward slashes so the same rules apply to
//! Windows (`C:\dir`) and Unix (`/dir`) input.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[/\\]+").expect("separator pattern is valid"));

static PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-zA-Z]+:)?//?").expect("prefix pattern is valid"));

static TRAILING_PARENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\.\./?$").expect("trailing parent pattern is valid"));

/// Convert every run of `/` and `\` into a single `/` and trim whitespace.
///
/// # Examples
///
/// ```
/// use vpath::path::normalize::clean_separators;
///
/// assert_eq!(clean_separators(r"C:\server\\site//file.txt"), "C:/server/site/file.txt");
/// assert_eq!(clean_separators("  /a//b/  "), "/a/b/");
/// assert_eq!(clean_separators(""), "");
/// ```
#[must_use]
pub fn clean_separators(path: &str) -> String {
    SEPARATOR_RUN.replace_all(path.trim(), "/").into_owned()
}

/// Byte length of the prefix of an already separator-normalized path.
fn prefix_len(cleaned: &str) -> usize {
    PREFIX.find(cleaned).map_or(0, |m| m.end())
}

/// Return the filesystem prefix of a path, if it has one.
///
/// A prefix is an optional `letters:` sequence followed by one or two
/// slashes, matched after separator normalization.
///
/// # Examples
///
/// ```
/// use vpath::path::normalize::prefix;
///
/// assert_eq!(prefix("/var/www").as_deref(), Some("/"));
/// assert_eq!(prefix(r"P:\\Folder\").as_deref(), Some("P:/"));
/// assert_eq!(prefix("folder/file.txt"), None);
/// assert_eq!(prefix("default:folder/file.txt"), None);
/// ```
#[must_use]
pub fn prefix(path: &str) -> Option<String> {
    let cleaned = clean_separators(path);
    PREFIX.find(&cleaned).map(|m| m.as_str().to_string())
}

/// Lexically normalize a path.
///
/// Separators are normalized, the prefix is held aside, empty and `.`
/// segments are dropped and every `..` pops the previous segment. A `..`
/// with nothing left to pop is discarded.
///
/// # Examples
///
/// ```
/// use vpath::path::normalize::clean;
///
/// assert_eq!(clean("/a/./b/../c/"), "/a/c");
/// assert_eq!(clean(r"..\..\test\path\folder\"), "test/path/folder");
/// assert_eq!(clean("C:/site/../file.txt"), "C:/file.txt");
/// assert_eq!(clean("/.."), "/");
/// ```
#[must_use]
pub fn clean(path: &str) -> String {
    let cleaned = clean_separators(path);
    let (prefix, rest) = cleaned.split_at(prefix_len(&cleaned));

    let mut tokens: Vec<&str> = Vec::new();
    for part in rest.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                tokens.pop();
            }
            _ => tokens.push(part),
        }
    }

    format!("{prefix}{}", tokens.join("/"))
}

/// Check whether a path ends in a parent-directory traversal (`/..` or `/../`).
///
/// Such paths are canonicalized as soon as they are registered.
///
/// # Examples
///
/// ```
/// use vpath::path::normalize::has_trailing_parent;
///
/// assert!(has_trailing_parent("/srv/www/.."));
/// assert!(has_trailing_parent(r"C:\srv\www\..\"));
/// assert!(!has_trailing_parent("/srv/../www"));
/// ```
#[must_use]
pub fn has_trailing_parent(path: &str) -> bool {
    TRAILING_PARENT.is_match(&clean_separators(path))
}

/// Strip leading `/` and `\` characters from the relative part of a source.
#[must_use]
pub fn trim_leading_separators(path: &str) -> &str {
    path.trim_start_matches(['/', '\\'])
}

/// Split a source string on its first `:` into alias and relative part.
///
/// A source without a colon is an alias with an empty relative part.
///
/// # Examples
///
/// ```
/// use vpath::path::normalize::split_source;
///
/// assert_eq!(split_source("default:css/app.css"), ("default", "css/app.css"));
/// assert_eq!(split_source("default"), ("default", ""));
/// assert_eq!(split_source("a:b:c"), ("a", "b:c"));
/// ```
#[must_use]
pub fn split_source(source: &str) -> (&str, &str) {
    source.split_once(':').unwrap_or((source, ""))
}

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use vpath::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}
