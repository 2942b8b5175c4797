//! Main entry point for the vpath CLI.
//!
//! This is the command-line interface for the vpath alias resolver.
//! Aliases come from configuration files, `VPATH_*` environment variables
//! and `--alias` flags; the commands then resolve sources against them:
//! - `get`: Resolve a source to an existing file or directory
//! - `glob`: Match a pattern in an alias's first directory
//! - `url`: Build the URL of a resource
//! - `rel`: Resolve a source relative to the root

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        root: cli.root,
        aliases: cli.aliases,
        no_real_paths: cli.no_real_paths,
        base_url: cli.base_url,
    };

    if let Err(e) = vpath::init_logger(global.verbose, global.quiet).install() {
        eprintln!("Warning: failed to install logger: {e}");
    }

    let result = match cli.command {
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::Glob(cmd) => cmd.execute(&global),
        cli::Command::Paths(cmd) => cmd.execute(&global),
        cli::Command::Url(cmd) => cmd.execute(&global),
        cli::Command::Rel(cmd) => cmd.execute(&global),
        cli::Command::Clean(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
