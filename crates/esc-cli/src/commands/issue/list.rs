use esc_core::store::IssueFilter;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    status: Option<&str>,
    priority: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut filter = IssueFilter::default();
    if let Some(status) = status {
        filter = filter.status(status);
    }
    if let Some(priority) = priority {
        filter = filter.priority(priority);
    }

    let issues = ctx.manager.list(&filter).await?;
    output(&issues, flags.format)
}
