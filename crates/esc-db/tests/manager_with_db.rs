//! End-to-end lifecycle against a file-backed libSQL store.

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;

use esc_core::entities::{Issue, IssueDraft};
use esc_core::enums::IssueStatus;
use esc_core::errors::CoreError;
use esc_core::manager::IssueManager;
use esc_core::notify::IssueNotifier;
use esc_core::store::IssueFilter;
use esc_core::updates::IssueUpdateBuilder;
use esc_db::EscDb;

#[derive(Default)]
struct Recorder(Mutex<Vec<String>>);

impl IssueNotifier for Recorder {
    fn notify(&self, issue: &Issue) {
        self.0.lock().unwrap().push(issue.id.clone());
    }
}

#[tokio::test]
async fn lifecycle_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("issues.db");
    let path = path.to_str().unwrap();

    let recorder = Arc::new(Recorder::default());
    let manager = IssueManager::new(EscDb::open_local(path).await.unwrap(), Arc::clone(&recorder));

    let created = manager
        .create(
            IssueDraft::new("Pump failure")
                .issue_type("MACHINE_BREAKDOWN")
                .priority("High")
                .severity(4)
                .location("Line 3"),
        )
        .await
        .unwrap();
    assert_eq!(recorder.0.lock().unwrap().as_slice(), [created.id.clone()]);

    let acknowledged = manager
        .update(&created.id, IssueUpdateBuilder::new().status("InProgress").build())
        .await
        .unwrap();
    let resolved = manager
        .update(
            &created.id,
            IssueUpdateBuilder::new()
                .status("Resolved")
                .resolution_comment("fixed")
                .build(),
        )
        .await
        .unwrap();
    drop(manager);

    let reopened = EscDb::open_local(path).await.unwrap();
    let manager = IssueManager::new(reopened, None::<Recorder>);
    let stored = manager.get(&created.id).await.unwrap();

    assert_eq!(stored.status, IssueStatus::Resolved);
    assert_eq!(stored.reported_at, created.reported_at);
    assert_eq!(stored.acknowledged_at, acknowledged.acknowledged_at);
    assert_eq!(stored.resolved_at, resolved.resolved_at);
    assert_eq!(stored.resolution_comment.as_deref(), Some("fixed"));

    let closed = manager
        .update(&created.id, IssueUpdateBuilder::new().status("closed").build())
        .await
        .unwrap();
    assert_eq!(closed.status, IssueStatus::Closed);
    assert_eq!(closed.resolved_at, resolved.resolved_at);

    let listed = manager
        .list(&IssueFilter::default().status("Closed").priority("High"))
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let manager = IssueManager::new(EscDb::open_local(":memory:").await.unwrap(), None::<Recorder>);
    let err = manager
        .update("0000", IssueUpdateBuilder::new().status("Closed").build())
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound { .. }));
    assert!(manager.list(&IssueFilter::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_text_fields_pass_through_manager() {
    let recorder = Arc::new(Recorder::default());
    let manager = IssueManager::new(
        EscDb::open_local(":memory:").await.unwrap(),
        Arc::clone(&recorder),
    );

    let created = manager
        .create(IssueDraft::new("Pump failure").priority("").description(""))
        .await
        .unwrap();
    assert_eq!(created.priority.as_deref(), Some(""));
    assert_eq!(created.description.as_deref(), Some(""));

    manager
        .update(&created.id, IssueUpdateBuilder::new().resolution_comment("x").build())
        .await
        .unwrap();
    let cleared = manager
        .update(&created.id, IssueUpdateBuilder::new().resolution_comment("").build())
        .await
        .unwrap();
    assert_eq!(cleared.resolution_comment.as_deref(), Some(""));

    let listed = manager
        .list(&IssueFilter::default().priority(""))
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
}
