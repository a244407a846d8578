use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::IssueStatus;

/// An operational issue such as a machine breakdown or a quality defect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Free-form category, e.g. `MACHINE_BREAKDOWN`.
    #[serde(rename = "type")]
    pub issue_type: Option<String>,
    /// Free-form ordinal tag: Low, Medium, High, Critical.
    pub priority: Option<String>,
    /// Intended range 1 (minor) to 5 (critical); not enforced.
    pub severity: Option<i32>,
    /// Plant, area, or line.
    pub location: Option<String>,
    pub status: IssueStatus,
    pub reported_at: DateTime<Utc>,
    pub acknowledged_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolution_comment: Option<String>,
}

/// Input for creating an issue. Only `title` is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub issue_type: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub severity: Option<i32>,
    #[serde(default)]
    pub location: Option<String>,
}

impl IssueDraft {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn issue_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = Some(issue_type.into());
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    #[must_use]
    pub const fn severity(mut self, severity: i32) -> Self {
        self.severity = Some(severity);
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}
