use esc_core::entities::IssueDraft;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub title: String,
    pub description: Option<String>,
    pub issue_type: Option<String>,
    pub priority: Option<String>,
    pub severity: Option<i32>,
    pub location: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let issue = ctx.manager.create(build_draft(params)).await?;
    output(&issue, flags.format)
}

fn build_draft(params: Params) -> IssueDraft {
    let mut draft = IssueDraft::new(params.title);
    if let Some(description) = params.description {
        draft = draft.description(description);
    }
    if let Some(issue_type) = params.issue_type {
        draft = draft.issue_type(issue_type);
    }
    if let Some(priority) = params.priority {
        draft = draft.priority(priority);
    }
    if let Some(severity) = params.severity {
        draft = draft.severity(severity);
    }
    if let Some(location) = params.location {
        draft = draft.location(location);
    }
    draft
}
