//! Status transitions and their timestamp side effects.

use chrono::{DateTime, Utc};

use crate::entities::Issue;
use crate::enums::IssueStatus;
use crate::errors::CoreError;

/// What to do with a status change that is not on the transition table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Accept any status and log off-table transitions.
    #[default]
    Permissive,
    /// Reject off-table transitions with [`CoreError::InvalidTransition`].
    Strict,
}

impl TransitionPolicy {
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Permissive }
    }

    /// Decide whether `issue` may move to `next`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` under [`TransitionPolicy::Strict`]
    /// when the move is off the table.
    pub fn check(self, issue: &Issue, next: &IssueStatus) -> Result<(), CoreError> {
        if issue.status.can_transition_to(next) {
            return Ok(());
        }
        match self {
            Self::Permissive => {
                tracing::warn!(
                    issue_id = %issue.id,
                    from = %issue.status,
                    to = %next,
                    "accepting status change outside the transition table"
                );
                Ok(())
            }
            Self::Strict => Err(CoreError::InvalidTransition {
                entity_type: "issue".to_string(),
                id: issue.id.clone(),
                from: issue.status.to_string(),
                to: next.to_string(),
            }),
        }
    }
}

/// Set `issue.status` and stamp the set-once lifecycle timestamps.
///
/// `acknowledged_at` is written on the first move into `InProgress`,
/// `resolved_at` on the first move into `Resolved` or `Closed`.
pub fn apply_status(issue: &mut Issue, next: IssueStatus, now: DateTime<Utc>) {
    if next == IssueStatus::InProgress {
        issue.acknowledged_at.get_or_insert(now);
    } else if next.is_resolution() {
        issue.resolved_at.get_or_insert(now);
    }
    issue.status = next;
}
