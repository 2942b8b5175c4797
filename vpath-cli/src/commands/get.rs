//! Command to resolve a source to an existing file or directory.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::Args;

/// Resolve `alias:path` to the first existing match.
#[derive(Args)]
pub struct GetCommand {
    /// Source to resolve, e.g. `assets:css/site.css`
    #[arg(value_name = "SOURCE")]
    pub source: String,
}

impl GetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global)?;

        match resolver.get(&self.source)? {
            Some(path) => {
                println!("{path}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "No match for {}",
                self.source
            ))),
        }
    }
}
