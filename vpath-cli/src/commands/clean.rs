//! Command to lexically normalize a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Normalize separators and `.`/`..` segments without touching the filesystem.
#[derive(Args)]
pub struct CleanCommand {
    /// Path to normalize
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Print only the path's prefix such as `/` or `C:/`, failing if it has none
    #[arg(long)]
    pub prefix: bool,
}

impl CleanCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if self.prefix {
            let prefix = vpath::prefix(&self.path).ok_or_else(|| {
                CliError::SemanticFailure(format!("{} has no prefix", self.path))
            })?;
            println!("{prefix}");
            return Ok(());
        }

        println!("{}", vpath::clean(&self.path));
        Ok(())
    }
}
