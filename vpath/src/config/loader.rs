//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading vpath configuration files
//! from various locations with proper precedence.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::alias::names_alias;
use crate::path::normalize::{clean_separators, expand_tilde, prefix};

/// File name of the project configuration.
pub const PROJECT_CONFIG_FILE: &str = "vpath.yaml";

/// File name of the private, uncommitted project configuration.
pub const LOCAL_CONFIG_FILE: &str = "vpath.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use vpath::config::ConfigSource;
/// use std::path::PathBuf;
///
/// // User config has lowest precedence
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.vpath/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use vpath::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.vpath/config.yaml` (precedence 1)
    /// 2. Project `vpath.yaml` walking up from `working_dir` (precedence 2)
    /// 3. Project `vpath.local.yaml` next to it (precedence 3)
    ///
    /// `user_dir` overrides the directory the user config is loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, user_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(user_dir)? {
            sources.push(user_config);
        }

        sources.extend(Self::discover_project_configs(working_dir)?);
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Load a configuration file named explicitly by the caller (precedence 4).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_explicit(path: &Path) -> Result<ConfigSource> {
        let path = expand_tilde(path)?;
        let config = Self::load_file(&path)?;
        Ok(ConfigSource {
            path,
            precedence: 4,
            config,
        })
    }

    fn load_user_config(user_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match user_dir {
            Some(dir) => dir.join("config.yaml"),
            None => Self::user_config_path()?,
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either `vpath.yaml` or
    /// `vpath.local.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(PROJECT_CONFIG_FILE, 2), (LOCAL_CONFIG_FILE, 3)] {
                let candidate = current.join(name);
                if candidate.exists() {
                    log::debug!("Found configuration file {}", candidate.display());
                    let config = Self::load_file(&candidate)?;
                    configs.push(ConfigSource {
                        path: candidate,
                        precedence,
                        config,
                    });
                }
            }

            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// Relative `root` and alias paths are anchored to the file's directory
    /// and `~` is expanded. Alias references are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        let mut config: Config = serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::anchor_paths(&mut config, base)?;
        Ok(config)
    }

    /// Make every relative filesystem path in `config` relative to `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if tilde expansion fails.
    pub fn anchor_paths(config: &mut Config, base: &Path) -> Result<()> {
        if let Some(root) = config.root.take() {
            config.root = Some(anchor(&root, base)?);
        }

        for alias in config.aliases.iter_mut().flatten() {
            for path in &mut alias.paths {
                if !is_reference(path) {
                    *path = anchor(path, base)?;
                }
            }
        }

        Ok(())
    }

    fn user_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
            path: PathBuf::from("~"),
            reason: "Cannot determine home directory".to_string(),
        })?;
        Ok(home.join(".vpath").join("config.yaml"))
    }
}

/// Whether a configured alias path is a reference to another alias.
fn is_reference(path: &str) -> bool {
    names_alias(path) || (path.contains(':') && prefix(path).is_none())
}

fn anchor(path: &str, base: &Path) -> Result<String> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    if trimmed.starts_with('~') {
        let expanded = expand_tilde(Path::new(trimmed))?;
        return Ok(clean_separators(&expanded.to_string_lossy()));
    }

    if prefix(trimmed).is_some() {
        return Ok(clean_separators(trimmed));
    }

    let base = base.to_string_lossy();
    if base.is_empty() {
        Ok(clean_separators(trimmed))
    } else {
        Ok(clean_separators(&format!("{base}/{trimmed}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::AliasConfig;
    use tempfile::TempDir;

    fn slash(path: &Path) -> String {
        clean_separators(&path.to_string_lossy())
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_load_anchors_relative_paths() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("vpath.yaml");
        fs::write(
            &config_path,
            "root: public\naliases:\n  - name: assets\n    paths: [public/assets, /abs, theme:css, ':x']\n",
        )
        .unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        let base = slash(temp_dir.path());

        assert_eq!(config.root, Some(format!("{base}/public")));
        assert_eq!(
            config.aliases.unwrap()[0].paths,
            [
                format!("{base}/public/assets"),
                "/abs".to_string(),
                "theme:css".to_string(),
                ":x".to_string(),
            ]
        );
    }

    #[test]
    fn test_anchor_expands_tilde() {
        let home = slash(&home::home_dir().unwrap());
        let mut config = Config {
            root: Some("~/site".into()),
            aliases: Some(vec![AliasConfig::new("assets", vec!["~".into()])]),
            ..Config::default()
        };

        ConfigLoader::anchor_paths(&mut config, Path::new("/etc")).unwrap();
        assert_eq!(config.root, Some(format!("{home}/site")));
        assert_eq!(config.aliases.unwrap()[0].paths, [home]);
    }

    #[test]
    fn test_anchor_keeps_windows_absolute_paths() {
        assert_eq!(anchor(r"C:\site", Path::new("/etc")).unwrap(), "C:/site");
    }

    #[test]
    fn test_discover_no_configs() {
        let temp_dir = TempDir::new().unwrap();
        let configs = ConfigLoader::discover_project_configs(temp_dir.path()).unwrap();
        assert!(configs.is_empty());
    }

    #[test]
    fn test_discover_both_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("vpath.yaml"), "root: /main\n").unwrap();
        fs::write(temp_dir.path().join("vpath.local.yaml"), "root: /local\n").unwrap();

        let configs = ConfigLoader::discover_project_configs(temp_dir.path()).unwrap();
        assert_eq!(configs.len(), 2);

        let project = configs.iter().find(|c| c.precedence == 2).unwrap();
        let local = configs.iter().find(|c| c.precedence == 3).unwrap();
        assert_eq!(project.config.root.as_deref(), Some("/main"));
        assert_eq!(local.config.root.as_deref(), Some("/local"));
    }

    #[test]
    fn test_discover_stops_at_first_config() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("child");
        fs::create_dir(&child).unwrap();
        fs::write(temp_dir.path().join("vpath.yaml"), "root: /parent\n").unwrap();

        let configs = ConfigLoader::discover_project_configs(&child).unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].config.root.as_deref(), Some("/parent"));
    }

    #[test]
    fn test_load_all_uses_user_dir() {
        let user_dir = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(user_dir.path().join("config.yaml"), "real_paths: false\n").unwrap();
        fs::write(project.path().join("vpath.yaml"), "real_paths: true\n").unwrap();

        let sources = ConfigLoader::load_all(project.path(), Some(user_dir.path())).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].precedence, 1);
        assert_eq!(sources[1].precedence, 2);
    }

    #[test]
    fn test_load_explicit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.yaml");
        fs::write(&path, "base_url: https://example.com\n").unwrap();

        let source = ConfigLoader::load_explicit(&path).unwrap();
        assert_eq!(source.precedence, 4);
        assert_eq!(source.config.base_url.as_deref(), Some("https://example.com"));
    }
}
