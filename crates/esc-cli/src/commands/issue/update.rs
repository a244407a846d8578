use esc_core::updates::IssueUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub status: Option<String>,
    pub comment: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = IssueUpdateBuilder::new();
    if let Some(status) = params.status {
        builder = builder.status(status);
    }
    if let Some(comment) = params.comment {
        builder = builder.resolution_comment(comment);
    }

    let issue = ctx.manager.update(&params.id, builder.build()).await?;
    output(&issue, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.status.is_none() && params.comment.is_none() {
        anyhow::bail!("At least one of --status or --comment must be provided");
    }
    Ok(())
}
