//! Command to resolve a source relative to the root.

use crate::error::CliError;
use crate::utils::{build_resolver, print_list, GlobalOptions};
use clap::Args;

/// Resolve a source and print it relative to the root directory.
#[derive(Args)]
pub struct RelCommand {
    /// Source to resolve, or a pattern with `--glob`
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Treat the source as a glob pattern and print every match
    #[arg(long)]
    pub glob: bool,
}

impl RelCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global)?;

        if self.glob {
            return print_list(&resolver.rel_glob(&self.source)?, false);
        }

        let rel = resolver
            .rel(&self.source)?
            .ok_or_else(|| CliError::SemanticFailure(format!("No match for {}", self.source)))?;

        println!("{rel}");
        Ok(())
    }
}
