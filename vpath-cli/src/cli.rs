//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CleanCommand, CompletionsCommand, GetCommand, GlobCommand, PathsCommand, RelCommand,
    UrlCommand, ValidateCommand,
};
use crate::utils::AliasArg;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving virtual `alias:path` strings.
#[derive(Parser)]
#[command(name = "vpath")]
#[command(version, about = "Resolve virtual alias:path strings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load an additional configuration file
    #[arg(long, value_name = "FILE", global = true, env = "VPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the root directory
    #[arg(long, value_name = "DIR", global = true)]
    pub root: Option<String>,

    /// Register a directory under an alias (repeatable, prepended in order)
    #[arg(long = "alias", value_name = "NAME=PATH", global = true)]
    pub aliases: Vec<AliasArg>,

    /// Keep directories as registered instead of canonicalizing them
    #[arg(long, global = true)]
    pub no_real_paths: bool,

    /// Base URL for full URLs
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a source to the first existing file or directory
    Get(GetCommand),

    /// List entries matching a pattern in an alias's first directory
    Glob(GlobCommand),

    /// Show the resolved directories of an alias
    Paths(PathsCommand),

    /// Build the URL of a resource below the root
    Url(UrlCommand),

    /// Resolve a source relative to the root
    Rel(RelCommand),

    /// Lexically normalize a path
    Clean(CleanCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
