//! Build script for vpath-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("vpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve virtual alias:path strings")
        .long_about(
            "Resolve virtual alias:path strings against ordered lists of directories, \
             and turn the results into root-relative paths or URLs",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load an additional configuration file")
                .value_name("FILE")
                .global(true)
                .env("VPATH_CONFIG"),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .help("Override the root directory")
                .value_name("DIR")
                .global(true),
        )
        .arg(
            Arg::new("alias")
                .long("alias")
                .help("Register a directory under an alias (repeatable, prepended in order)")
                .value_name("NAME=PATH")
                .global(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("no-real-paths")
                .long("no-real-paths")
                .help("Keep directories as registered instead of canonicalizing them")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .help("Base URL for full URLs")
                .value_name("URL")
                .global(true),
        )
        .subcommands(vec![
            Command::new("get")
                .about("Resolve a source to the first existing file or directory")
                .long_about("Print the first existing match of alias:path across the alias's directories"),
            Command::new("glob")
                .about("List entries matching a pattern in an alias's first directory")
                .long_about("Expand a glob pattern, including {a,b} groups, in the highest-priority directory"),
            Command::new("paths")
                .about("Show the resolved directories of an alias")
                .long_about("Print an alias's directories in lookup order, with references expanded"),
            Command::new("url")
                .about("Build the URL of a resource below the root")
                .long_about("Print the full or root-relative URL of an existing resource"),
            Command::new("rel")
                .about("Resolve a source relative to the root")
                .long_about("Print a resolved source, or every glob match, relative to the root"),
            Command::new("clean")
                .about("Lexically normalize a path")
                .long_about("Normalize separators and dot segments without touching the filesystem"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a vpath configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("vpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
