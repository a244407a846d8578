use clap::Subcommand;

use crate::cli::subcommands::IssueCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Report and track issues.
    Issue {
        #[command(subcommand)]
        action: IssueCommands,
    },
}
