//! Base URL providers for absolute URL generation.

use url::Url;

use crate::error::{Error, Result};

/// Supplies the scheme and host prepended to URLs built with `full = true`.
///
/// Any `Fn() -> String` closure is a provider, which is convenient when the
/// host depends on the current request.
///
/// # Examples
///
/// ```
/// use vpath::base_url::{BaseUrlProvider, StaticBaseUrl};
///
/// let provider = StaticBaseUrl::new("https://cdn.example.com/").unwrap();
/// assert_eq!(provider.current_base_url(), "https://cdn.example.com");
///
/// let dynamic = || "http://tenant.example.com".to_string();
/// assert_eq!(dynamic.current_base_url(), "http://tenant.example.com");
/// ```
pub trait BaseUrlProvider: Send + Sync {
    /// The base URL without a trailing slash.
    fn current_base_url(&self) -> String;
}

impl<F> BaseUrlProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    fn current_base_url(&self) -> String {
        self()
    }
}

/// A fixed, validated base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticBaseUrl {
    url: String,
}

impl StaticBaseUrl {
    /// Base URL used when none is configured.
    pub const DEFAULT: &'static str = "http://localhost";

    /// Validate and store a base URL.
    ///
    /// The URL must be absolute `http` or `https` with a host, and may carry
    /// a path prefix. Trailing slashes are removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the URL cannot be parsed, uses another
    /// scheme, has no host, or carries a query or fragment.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let parsed = Url::parse(trimmed).map_err(|e| Error::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if parsed.host_str().unwrap_or_default().is_empty() {
            return Err(Error::InvalidUrl {
                url: raw.to_string(),
                reason: "missing host".to_string(),
            });
        }

        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(Error::InvalidUrl {
                url: raw.to_string(),
                reason: "query and fragment are not allowed".to_string(),
            });
        }

        Ok(Self {
            url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// The stored URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Default for StaticBaseUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
        }
    }
}

impl BaseUrlProvider for StaticBaseUrl {
    fn current_base_url(&self) -> String {
        self.url.clone()
    }
}
