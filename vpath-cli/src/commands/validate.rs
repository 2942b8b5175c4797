//! Command to check a vpath configuration file without building a resolver.
//!
//! The file is parsed against the vpath schema and run through
//! [`ConfigValidator`]. On success a short summary of the root and the alias
//! table is printed, along with any alias references the file relies on
//! other configuration layers to define.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::collections::BTreeSet;
use std::path::PathBuf;
use vpath::config::{Config, ConfigValidator};
use vpath::path::alias::names_alias;
use vpath::Mode;

/// Validate a vpath configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.file.is_file() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.file.display()
            )));
        }

        let contents = std::fs::read_to_string(&self.file)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(|e| {
            eprintln!("Parse error in {}: {e}", self.file.display());
            CliError::SemanticFailure("Not a vpath configuration file".to_string())
        })?;

        if let Err(e) = ConfigValidator::validate(&config) {
            eprintln!("Validation error: {e}");
            return Err(CliError::SemanticFailure(format!(
                "{} failed validation",
                self.file.display()
            )));
        }

        println!("Configuration is valid");
        if !global.quiet {
            for line in summary(&config) {
                println!("  {line}");
            }
        }

        Ok(())
    }
}

/// Describe the root and alias table of a validated configuration.
fn summary(config: &Config) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(root) = &config.root {
        lines.push(format!("root: {root}"));
    }

    let aliases = config.aliases.as_deref().unwrap_or_default();
    for alias in aliases {
        let mode = alias.mode.unwrap_or(Mode::Prepend);
        lines.push(format!(
            "alias {}: {} path(s), {mode}",
            alias.name,
            alias.paths.len()
        ));
    }

    let external = external_references(config);
    if !external.is_empty() {
        let names: Vec<&str> = external.iter().map(String::as_str).collect();
        lines.push(format!("references defined elsewhere: {}", names.join(", ")));
    }

    lines
}

/// Aliases referenced by entries but not declared in the same file.
///
/// `root` is always available and never reported.
fn external_references(config: &Config) -> BTreeSet<String> {
    let aliases = config.aliases.as_deref().unwrap_or_default();
    let declared: BTreeSet<&str> = aliases.iter().map(|alias| alias.name.as_str()).collect();

    aliases
        .iter()
        .flat_map(|alias| alias.paths.iter())
        .filter(|path| names_alias(path))
        .filter_map(|path| path.split_once(':').map(|(head, _)| head))
        .filter(|head| *head != "root" && !declared.contains(head))
        .map(str::to_string)
        .collect()
}
