//! # esc-db
//!
//! libSQL persistence for Escalate issues.
//!
//! [`EscDb`] owns the database and connection, runs the embedded migrations on
//! open, and implements `esc_core::store::IssueStore` (see [`repos::issue`]).

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for issue storage.
pub struct EscDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl EscDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Creates the parent directory if needed and runs migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        if path != ":memory:" {
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        DatabaseError::Migration(format!(
                            "create directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
        }

        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let esc_db = Self { db, conn };
        esc_db.run_migrations().await?;
        tracing::debug!(path, "issue store opened");
        Ok(esc_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> EscDb {
        EscDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;
        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                ["issues"],
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some(), "table 'issues' should exist");
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn column_defaults_apply() {
        let db = test_db().await;
        db.conn()
            .execute(
                "INSERT INTO issues (id, title) VALUES ('iss-raw', 'Raw insert')",
                (),
            )
            .await
            .unwrap();

        let mut rows = db
            .conn()
            .query("SELECT status, reported_at FROM issues WHERE id = 'iss-raw'", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "New");
        let reported = row.get::<String>(1).unwrap();
        assert!(helpers::parse_datetime(&reported).is_ok());
    }

    #[tokio::test]
    async fn open_local_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("issues.db");
        let db = EscDb::open_local(path.to_str().unwrap()).await.unwrap();
        drop(db);
        assert!(path.exists());
    }
}
