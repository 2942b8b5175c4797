//! Command to build the URL of a resource below the root.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::Args;

/// Print the URL of an existing resource.
#[derive(Args)]
pub struct UrlCommand {
    /// Virtual or real path, optionally with a `?query`
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Print only the root-relative part, without the base URL
    #[arg(long)]
    pub relative: bool,
}

impl UrlCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global)?;

        let url = resolver
            .url(&self.source, !self.relative)?
            .ok_or_else(|| CliError::SemanticFailure(format!("No URL for {}", self.source)))?;

        println!("{url}");
        Ok(())
    }
}
