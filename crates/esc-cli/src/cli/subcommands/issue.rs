use clap::Subcommand;

/// Issue commands.
#[derive(Clone, Debug, Subcommand)]
pub enum IssueCommands {
    /// Report a new issue and start its escalation workflow.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "type")]
        issue_type: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        severity: Option<i32>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Get an issue by ID.
    Get { id: String },
    /// List issues, newest first.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
    },
    /// Change status and/or resolution comment.
    Update {
        id: String,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        comment: Option<String>,
    },
}
