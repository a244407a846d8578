//! The issue store seam.
//!
//! The manager never talks to a database directly; it is handed something that
//! implements [`IssueStore`]. `esc-db` provides the libSQL implementation.

use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entities::Issue;
use crate::enums::IssueStatus;

/// Conjunctive filter for listing issues. `None` fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueFilter {
    pub status: Option<IssueStatus>,
    pub priority: Option<String>,
}

impl IssueFilter {
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(IssueStatus::from(status.into()));
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Whether `issue` satisfies every populated field.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        self.status.as_ref().is_none_or(|s| *s == issue.status)
            && self
                .priority
                .as_deref()
                .is_none_or(|p| issue.priority.as_deref() == Some(p))
    }
}

/// Durable keyed storage for issues.
pub trait IssueStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Insert or replace the issue with the same id, returning what was stored.
    fn save(&self, issue: &Issue) -> impl Future<Output = Result<Issue, Self::Error>> + Send;

    fn find_by_id(&self, id: &str)
    -> impl Future<Output = Result<Option<Issue>, Self::Error>> + Send;

    fn find_all(
        &self,
        filter: &IssueFilter,
    ) -> impl Future<Output = Result<Vec<Issue>, Self::Error>> + Send;
}

impl<S: IssueStore> IssueStore for Arc<S> {
    type Error = S::Error;

    fn save(&self, issue: &Issue) -> impl Future<Output = Result<Issue, Self::Error>> + Send {
        (**self).save(issue)
    }

    fn find_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Issue>, Self::Error>> + Send {
        (**self).find_by_id(id)
    }

    fn find_all(
        &self,
        filter: &IssueFilter,
    ) -> impl Future<Output = Result<Vec<Issue>, Self::Error>> + Send {
        (**self).find_all(filter)
    }
}
