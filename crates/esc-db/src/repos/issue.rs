//! Issue repository: upsert, lookup and filtered listing.

use esc_core::entities::Issue;
use esc_core::enums::IssueStatus;
use esc_core::store::{IssueFilter, IssueStore};

use crate::EscDb;
use crate::error::DatabaseError;
use crate::helpers::{
    format_datetime, get_opt_text, opt_datetime, opt_text, parse_datetime,
    parse_optional_datetime,
};

const SELECT_COLS: &str = "id, title, description, type, priority, severity, location, status, \
     reported_at, acknowledged_at, resolved_at, resolution_comment";

// `id` and `reported_at` are absent from the UPDATE arm: they never change after insert.
const UPSERT_SQL: &str = "INSERT INTO issues (id, title, description, type, priority, severity, \
     location, status, reported_at, acknowledged_at, resolved_at, resolution_comment)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
     ON CONFLICT(id) DO UPDATE SET
        title = excluded.title,
        description = excluded.description,
        type = excluded.type,
        priority = excluded.priority,
        severity = excluded.severity,
        location = excluded.location,
        status = excluded.status,
        acknowledged_at = excluded.acknowledged_at,
        resolved_at = excluded.resolved_at,
        resolution_comment = excluded.resolution_comment";

fn row_to_issue(row: &libsql::Row) -> Result<Issue, DatabaseError> {
    let severity = row
        .get::<Option<i64>>(5)?
        .map(i32::try_from)
        .transpose()
        .map_err(|e| DatabaseError::Query(format!("severity out of range: {e}")))?;

    Ok(Issue {
        id: row.get(0)?,
        title: row.get(1)?,
        description: get_opt_text(row, 2)?,
        issue_type: get_opt_text(row, 3)?,
        priority: get_opt_text(row, 4)?,
        severity,
        location: get_opt_text(row, 6)?,
        status: IssueStatus::parse(&row.get::<String>(7)?),
        reported_at: parse_datetime(&row.get::<String>(8)?)?,
        acknowledged_at: parse_optional_datetime(get_opt_text(row, 9)?.as_deref())?,
        resolved_at: parse_optional_datetime(get_opt_text(row, 10)?.as_deref())?,
        resolution_comment: get_opt_text(row, 11)?,
    })
}

impl EscDb {
    pub async fn save_issue(&self, issue: &Issue) -> Result<Issue, DatabaseError> {
        let params: Vec<libsql::Value> = vec![
            issue.id.as_str().into(),
            issue.title.as_str().into(),
            opt_text(issue.description.as_deref()),
            opt_text(issue.issue_type.as_deref()),
            opt_text(issue.priority.as_deref()),
            issue
                .severity
                .map_or(libsql::Value::Null, |s| i64::from(s).into()),
            opt_text(issue.location.as_deref()),
            issue.status.as_str().into(),
            format_datetime(issue.reported_at).into(),
            opt_datetime(issue.acknowledged_at),
            opt_datetime(issue.resolved_at),
            opt_text(issue.resolution_comment.as_deref()),
        ];

        self.conn()
            .execute(UPSERT_SQL, libsql::params_from_iter(params))
            .await?;

        self.get_issue(&issue.id)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    pub async fn get_issue(&self, id: &str) -> Result<Option<Issue>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM issues WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_issue(&row)?)),
            None => Ok(None),
        }
    }

    /// Newest first.
    pub async fn list_issues(&self, filter: &IssueFilter) -> Result<Vec<Issue>, DatabaseError> {
        let mut clauses = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref status) = filter.status {
            params.push(status.as_str().into());
            clauses.push(format!("status = ?{}", params.len()));
        }
        if let Some(ref priority) = filter.priority {
            params.push(priority.as_str().into());
            clauses.push(format!("priority = ?{}", params.len()));
        }

        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", clauses.join(" AND "))
        };
        let sql = format!("SELECT {SELECT_COLS} FROM issues {where_sql} ORDER BY reported_at DESC");
        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut issues = Vec::new();
        while let Some(row) = rows.next().await? {
            issues.push(row_to_issue(&row)?);
        }
        Ok(issues)
    }
}

impl IssueStore for EscDb {
    type Error = DatabaseError;

    async fn save(&self, issue: &Issue) -> Result<Issue, DatabaseError> {
        self.save_issue(issue).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Issue>, DatabaseError> {
        self.get_issue(id).await
    }

    async fn find_all(&self, filter: &IssueFilter) -> Result<Vec<Issue>, DatabaseError> {
        self.list_issues(filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;

    async fn test_db() -> EscDb {
        EscDb::open_local(":memory:").await.unwrap()
    }

    fn issue(id: &str, priority: &str) -> Issue {
        Issue {
            id: id.to_string(),
            title: "Pump failure".into(),
            description: Some("Pump P-7 stopped".into()),
            issue_type: Some("MACHINE_BREAKDOWN".into()),
            priority: Some(priority.to_string()),
            severity: Some(4),
            location: Some("Line 3".into()),
            status: IssueStatus::New,
            reported_at: Utc::now(),
            acknowledged_at: None,
            resolved_at: None,
            resolution_comment: None,
        }
    }

    #[tokio::test]
    async fn save_and_get_roundtrip() {
        let db = test_db().await;
        let original = issue("iss-1", "High");

        let saved = db.save_issue(&original).await.unwrap();
        let fetched = db.get_issue("iss-1").await.unwrap().unwrap();

        assert_eq!(saved, fetched);
        assert_eq!(fetched.title, "Pump failure");
        assert_eq!(fetched.severity, Some(4));
        assert_eq!(fetched.status, IssueStatus::New);
        // Stored with nanosecond precision.
        assert_eq!(fetched.reported_at, original.reported_at);
    }

    #[tokio::test]
    async fn optional_fields_roundtrip_as_none() {
        let db = test_db().await;
        let bare = Issue {
            description: None,
            issue_type: None,
            priority: None,
            severity: None,
            location: None,
            ..issue("iss-bare", "Low")
        };
        let saved = db.save_issue(&bare).await.unwrap();
        assert!(saved.description.is_none());
        assert!(saved.priority.is_none());
        assert!(saved.severity.is_none());
    }

    #[tokio::test]
    async fn empty_strings_survive_roundtrip() {
        let db = test_db().await;
        let blank = Issue {
            description: Some(String::new()),
            location: Some(String::new()),
            resolution_comment: Some(String::new()),
            ..issue("iss-empty", "")
        };

        let saved = db.save_issue(&blank).await.unwrap();
        assert_eq!(saved.priority.as_deref(), Some(""));
        assert_eq!(saved.description.as_deref(), Some(""));
        assert_eq!(saved.location.as_deref(), Some(""));
        assert_eq!(saved.resolution_comment.as_deref(), Some(""));

        let listed = db
            .list_issues(&IssueFilter::default().priority(""))
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "iss-empty");
    }

    #[tokio::test]
    async fn comment_can_be_cleared_to_empty() {
        let db = test_db().await;
        let commented = Issue {
            resolution_comment: Some("x".into()),
            ..issue("iss-c", "High")
        };
        db.save_issue(&commented).await.unwrap();

        let cleared = db
            .save_issue(&Issue {
                resolution_comment: Some(String::new()),
                ..commented
            })
            .await
            .unwrap();
        assert_eq!(cleared.resolution_comment.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn get_missing_is_none() {
        let db = test_db().await;
        assert!(db.get_issue("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_updates_mutable_fields_only() {
        let db = test_db().await;
        let original = db.save_issue(&issue("iss-2", "High")).await.unwrap();

        let acknowledged = Utc::now();
        let changed = Issue {
            status: IssueStatus::InProgress,
            acknowledged_at: Some(acknowledged),
            resolution_comment: Some("technician dispatched".into()),
            reported_at: original.reported_at + Duration::days(1),
            ..original.clone()
        };
        let saved = db.save_issue(&changed).await.unwrap();

        assert_eq!(saved.status, IssueStatus::InProgress);
        assert_eq!(saved.acknowledged_at, Some(acknowledged));
        assert_eq!(saved.resolution_comment.as_deref(), Some("technician dispatched"));
        assert_eq!(saved.reported_at, original.reported_at);
    }

    #[tokio::test]
    async fn unknown_status_is_stored_verbatim() {
        let db = test_db().await;
        let parked = Issue {
            status: IssueStatus::Other("WaitingForParts".into()),
            ..issue("iss-3", "Medium")
        };
        let saved = db.save_issue(&parked).await.unwrap();
        assert_eq!(saved.status.as_str(), "WaitingForParts");
    }

    #[tokio::test]
    async fn list_filters_conjunctively() {
        let db = test_db().await;
        db.save_issue(&issue("iss-a", "High")).await.unwrap();
        db.save_issue(&issue("iss-b", "Low")).await.unwrap();
        db.save_issue(&Issue {
            status: IssueStatus::InProgress,
            ..issue("iss-c", "High")
        })
        .await
        .unwrap();

        let all = db.list_issues(&IssueFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let high = db
            .list_issues(&IssueFilter::default().priority("High"))
            .await
            .unwrap();
        assert_eq!(high.len(), 2);

        let new_high = db
            .list_issues(&IssueFilter::default().status("new").priority("High"))
            .await
            .unwrap();
        assert_eq!(new_high.len(), 1);
        assert_eq!(new_high[0].id, "iss-a");

        let in_progress = db
            .list_issues(&IssueFilter::default().status("InProgress"))
            .await
            .unwrap();
        assert_eq!(in_progress.len(), 1);
        assert_eq!(in_progress[0].id, "iss-c");
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let db = test_db().await;
        let now = Utc::now();
        db.save_issue(&Issue {
            reported_at: now - Duration::hours(2),
            ..issue("iss-old", "Low")
        })
        .await
        .unwrap();
        db.save_issue(&Issue {
            reported_at: now,
            ..issue("iss-new", "Low")
        })
        .await
        .unwrap();

        let all = db.list_issues(&IssueFilter::default()).await.unwrap();
        assert_eq!(all[0].id, "iss-new");
        assert_eq!(all[1].id, "iss-old");
    }
}
