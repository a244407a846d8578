//! The notification seam between the issue manager and the workflow dispatcher.
//!
//! `notify` is synchronous and returns nothing: implementations hand the work
//! off (e.g. to a background task) and must never fail the caller.

use std::sync::Arc;

use crate::entities::Issue;

/// Receives newly persisted issues.
pub trait IssueNotifier: Send + Sync {
    fn notify(&self, issue: &Issue);
}

impl<T: IssueNotifier + ?Sized> IssueNotifier for Arc<T> {
    fn notify(&self, issue: &Issue) {
        (**self).notify(issue);
    }
}

impl<T: IssueNotifier + ?Sized> IssueNotifier for Box<T> {
    fn notify(&self, issue: &Issue) {
        (**self).notify(issue);
    }
}

/// `None` means dispatch is disabled.
impl<T: IssueNotifier> IssueNotifier for Option<T> {
    fn notify(&self, issue: &Issue) {
        match self {
            Some(inner) => inner.notify(issue),
            None => tracing::debug!(issue_id = %issue.id, "workflow dispatch disabled; skipping"),
        }
    }
}
