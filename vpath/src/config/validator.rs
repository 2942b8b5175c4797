//! Configuration validation.
//!
//! This module checks a merged configuration before it is applied to a
//! resolver, so that mistakes surface with the offending field named.

use crate::base_url::StaticBaseUrl;
use crate::config::schema::{AliasConfig, Config};
use crate::error::{Error, Result};
use crate::path::AliasName;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use vpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref root) = config.root {
            Self::validate_non_empty("root", root)?;
        }

        if let Some(ref base_url) = config.base_url {
            StaticBaseUrl::new(base_url).map_err(|e| Error::Validation {
                field: "base_url".into(),
                message: e.to_string(),
            })?;
        }

        for (index, alias) in config.aliases.iter().flatten().enumerate() {
            Self::validate_alias(index, alias)?;
        }

        Ok(())
    }

    fn validate_non_empty(field: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }

    /// Validate one alias registration.
    ///
    /// The name must be registrable and no path may reference the alias
    /// itself.
    fn validate_alias(index: usize, alias: &AliasConfig) -> Result<()> {
        let field = format!("aliases[{index}]");

        let name = AliasName::parse(&alias.name).map_err(|e| Error::Validation {
            field: format!("{field}.name"),
            message: e.to_string(),
        })?;

        for path in &alias.paths {
            if path.contains('\0') {
                return Err(Error::Validation {
                    field: format!("{field}.paths"),
                    message: "Cannot contain null bytes".into(),
                });
            }

            if name.is_referenced_by(path.trim()) {
                return Err(Error::Validation {
                    field: format!("{field}.paths"),
                    message: format!("'{path}' references alias '{name}' itself"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_alias(alias: AliasConfig) -> Config {
        Config {
            aliases: Some(vec![alias]),
            ..Config::default()
        }
    }

    fn field_of(err: Error) -> String {
        match err {
            Error::Validation { field, .. } => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_valid_config() {
        let config = Config {
            root: Some("/srv/www".into()),
            real_paths: Some(true),
            base_url: Some("https://example.com".into()),
            aliases: Some(vec![AliasConfig::new(
                "assets",
                vec!["/srv/www/a".into(), "theme:assets".into()],
            )]),
        };
        ConfigValidator::validate(&config).unwrap();
    }

    #[test]
    fn test_empty_root() {
        let config = Config {
            root: Some("  ".into()),
            ..Config::default()
        };
        assert_eq!(field_of(ConfigValidator::validate(&config).unwrap_err()), "root");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = Config {
            base_url: Some("not a url".into()),
            ..Config::default()
        };
        assert_eq!(field_of(ConfigValidator::validate(&config).unwrap_err()), "base_url");
    }

    #[test]
    fn test_invalid_alias_names() {
        for name in ["a", "root", "!!"] {
            let config = with_alias(AliasConfig::new(name, vec![]));
            assert_eq!(
                field_of(ConfigValidator::validate(&config).unwrap_err()),
                "aliases[0].name"
            );
        }
    }

    #[test]
    fn test_self_referencing_alias() {
        let config = with_alias(AliasConfig::new("assets", vec!["Assets:css".into()]));
        assert_eq!(
            field_of(ConfigValidator::validate(&config).unwrap_err()),
            "aliases[0].paths"
        );
    }

    #[test]
    fn test_cross_references_are_allowed() {
        let config = Config {
            aliases: Some(vec![
                AliasConfig::new("first", vec!["second:".into()]),
                AliasConfig::new("second", vec!["first:".into()]),
            ]),
            ..Config::default()
        };
        ConfigValidator::validate(&config).unwrap();
    }
}
