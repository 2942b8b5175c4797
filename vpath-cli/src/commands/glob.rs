//! Command to glob inside an alias's highest-priority directory.

use crate::error::CliError;
use crate::utils::{build_resolver, print_list, GlobalOptions};
use clap::Args;

/// List entries matching a glob pattern.
#[derive(Args)]
pub struct GlobCommand {
    /// Pattern such as `assets:css/*.{css,map}`
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Print the matches as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl GlobCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global)?;
        let matches = resolver.glob(&self.pattern)?;

        if matches.is_empty() {
            log::debug!("No entries match {}", self.pattern);
        }

        print_list(&matches, self.json)
    }
}
