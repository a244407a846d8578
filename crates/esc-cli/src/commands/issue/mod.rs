mod create;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IssueCommands;
use crate::context::AppContext;

/// Handle `esc issue`.
pub async fn handle(
    action: IssueCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        IssueCommands::Create {
            title,
            description,
            issue_type,
            priority,
            severity,
            location,
        } => {
            create::run(
                create::Params {
                    title,
                    description,
                    issue_type,
                    priority,
                    severity,
                    location,
                },
                ctx,
                flags,
            )
            .await
        }
        IssueCommands::Get { id } => get::run(&id, ctx, flags).await,
        IssueCommands::List { status, priority } => {
            list::run(status.as_deref(), priority.as_deref(), ctx, flags).await
        }
        IssueCommands::Update {
            id,
            status,
            comment,
        } => update::run(update::Params { id, status, comment }, ctx, flags).await,
    }
}
