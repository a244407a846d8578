//! Request body for starting a workflow instance.
//!
//! ```json
//! {"definitionId": "...",
//!  "context": {"startEvent": {"issueid": "...", "title": "...", "description": "",
//!    "type": "...", "priority": "...", "location": "", "severity": 0, "date": "..."}}}
//! ```

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use esc_core::entities::Issue;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowInstanceRequest {
    pub definition_id: String,
    pub context: WorkflowContext,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowContext {
    pub start_event: StartEvent,
}

/// Issue snapshot handed to the workflow. Absent text becomes `""`, absent
/// severity becomes `0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartEvent {
    pub issueid: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub issue_type: Option<String>,
    pub priority: Option<String>,
    pub location: String,
    pub severity: i32,
    /// Reported time, RFC 3339 in UTC with millisecond precision.
    pub date: String,
}

impl WorkflowInstanceRequest {
    #[must_use]
    pub fn for_issue(definition_id: &str, issue: &Issue) -> Self {
        Self {
            definition_id: definition_id.to_string(),
            context: WorkflowContext {
                start_event: StartEvent {
                    issueid: issue.id.clone(),
                    title: issue.title.clone(),
                    description: issue.description.clone().unwrap_or_default(),
                    issue_type: issue.issue_type.clone(),
                    priority: issue.priority.clone(),
                    location: issue.location.clone().unwrap_or_default(),
                    severity: issue.severity.unwrap_or(0),
                    date: issue
                        .reported_at
                        .to_rfc3339_opts(SecondsFormat::Millis, true),
                },
            },
        }
    }
}
