//! Fire-and-forget workflow dispatch.
//!
//! Each new issue gets one background task that makes a single attempt to
//! start a workflow instance. Outcomes are logged, never returned. Tasks are
//! tracked so a short-lived process can wait for them before exiting.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::task::TaskTracker;

use esc_core::entities::Issue;
use esc_core::notify::IssueNotifier;

use crate::client::WorkflowClient;
use crate::error::WorkflowError;

#[derive(Debug, Clone)]
pub struct WorkflowDispatcher {
    client: Arc<WorkflowClient>,
    tasks: TaskTracker,
}

impl WorkflowDispatcher {
    #[must_use]
    pub fn new(client: WorkflowClient) -> Self {
        Self {
            client: Arc::new(client),
            tasks: TaskTracker::new(),
        }
    }

    #[must_use]
    pub fn client(&self) -> &WorkflowClient {
        &self.client
    }

    /// Spawn the dispatch for `issue` and return immediately.
    ///
    /// Returns `None` (and logs) when called outside a tokio runtime.
    pub fn dispatch(&self, issue: Issue) -> Option<JoinHandle<()>> {
        if tokio::runtime::Handle::try_current().is_err() {
            tracing::error!(issue_id = %issue.id, "no async runtime; workflow dispatch skipped");
            return None;
        }

        let client = Arc::clone(&self.client);
        Some(self.tasks.spawn(async move {
            run_dispatch(&client, &issue).await;
        }))
    }

    /// Number of dispatches still running.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Wait up to `grace` for in-flight dispatches. Returns `true` if all of
    /// them finished in time.
    pub async fn shutdown(&self, grace: Duration) -> bool {
        self.tasks.close();
        let drained = tokio::time::timeout(grace, self.tasks.wait()).await.is_ok();
        if !drained {
            tracing::warn!(
                pending = self.tasks.len(),
                "workflow dispatches still running at shutdown"
            );
        }
        drained
    }
}

async fn run_dispatch(client: &WorkflowClient, issue: &Issue) {
    match client.start_workflow(issue).await {
        Ok(body) => {
            tracing::info!(issue_id = %issue.id, response = %body, "workflow instance started");
        }
        Err(WorkflowError::Remote { status, body }) => {
            tracing::error!(
                issue_id = %issue.id,
                status,
                body = %body,
                "workflow engine rejected dispatch"
            );
        }
        Err(error) => {
            tracing::error!(issue_id = %issue.id, %error, "workflow dispatch failed");
        }
    }
}

impl IssueNotifier for WorkflowDispatcher {
    fn notify(&self, issue: &Issue) {
        drop(self.dispatch(issue.clone()));
    }
}
