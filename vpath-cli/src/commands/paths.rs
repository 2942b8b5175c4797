//! Command to show the resolved directory list of an alias.

use crate::error::CliError;
use crate::utils::{build_resolver, print_list, GlobalOptions};
use clap::Args;

/// Show the directories an alias resolves to, in lookup order.
#[derive(Args)]
pub struct PathsCommand {
    /// Alias, optionally followed by `:` and a path that is ignored
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Print the directories as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl PathsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global)?;
        let paths = resolver.get_paths(&self.source)?;
        print_list(&paths, self.json)
    }
}
