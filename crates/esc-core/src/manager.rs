//! The issue lifecycle manager.
//!
//! Every mutation follows the same protocol:
//! 1. Load or build the issue in memory
//! 2. Apply lifecycle rules
//! 3. Persist through the [`IssueStore`]
//! 4. On create only, hand the persisted issue to the [`IssueNotifier`]
//!
//! Notification happens strictly after a successful save and its outcome is
//! never observed here.

use chrono::Utc;
use uuid::Uuid;

use crate::entities::{Issue, IssueDraft};
use crate::enums::IssueStatus;
use crate::errors::CoreError;
use crate::lifecycle::{TransitionPolicy, apply_status};
use crate::notify::IssueNotifier;
use crate::store::{IssueFilter, IssueStore};
use crate::updates::IssueUpdate;

/// Owns the issue state machine. Collaborators are passed in explicitly.
pub struct IssueManager<S, N> {
    store: S,
    notifier: N,
    policy: TransitionPolicy,
}

impl<S, N> IssueManager<S, N>
where
    S: IssueStore,
    N: IssueNotifier,
{
    #[must_use]
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            store,
            notifier,
            policy: TransitionPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: TransitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    #[must_use]
    pub const fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Create an issue with status `New`, persist it, then notify.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the title is blank, or
    /// `CoreError::Store` if the save fails. In both cases nothing is notified.
    pub async fn create(&self, draft: IssueDraft) -> Result<Issue, CoreError> {
        if draft.title.trim().is_empty() {
            return Err(CoreError::Validation("title is required".to_string()));
        }

        let issue = Issue {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            issue_type: draft.issue_type,
            priority: draft.priority,
            severity: draft.severity,
            location: draft.location,
            status: IssueStatus::New,
            reported_at: Utc::now(),
            acknowledged_at: None,
            resolved_at: None,
            resolution_comment: None,
        };

        let saved = self.store.save(&issue).await.map_err(CoreError::store)?;
        tracing::info!(issue_id = %saved.id, "issue created");

        self.notifier.notify(&saved);
        Ok(saved)
    }

    /// Fetch one issue.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no issue has this id.
    pub async fn get(&self, id: &str) -> Result<Issue, CoreError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(CoreError::store)?
            .ok_or_else(|| CoreError::issue_not_found(id))
    }

    /// List issues matching `filter`. Ordering is whatever the store returns.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Store` if the query fails.
    pub async fn list(&self, filter: &IssueFilter) -> Result<Vec<Issue>, CoreError> {
        self.store.find_all(filter).await.map_err(CoreError::store)
    }

    /// Apply a status change and/or resolution comment. Never notifies.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id (no write happens),
    /// `CoreError::InvalidTransition` under a strict policy, or
    /// `CoreError::Store` if the save fails.
    pub async fn update(&self, id: &str, update: IssueUpdate) -> Result<Issue, CoreError> {
        let mut issue = self.get(id).await?;

        if let Some(next) = update.status {
            self.policy.check(&issue, &next)?;
            tracing::debug!(issue_id = %issue.id, from = %issue.status, to = %next, "status change");
            apply_status(&mut issue, next, Utc::now());
        }
        if let Some(comment) = update.resolution_comment {
            issue.resolution_comment = Some(comment);
        }

        self.store.save(&issue).await.map_err(CoreError::store)
    }
}
