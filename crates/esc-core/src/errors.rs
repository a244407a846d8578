//! Error types raised by the issue manager.
//!
//! Store implementations keep their own error types (e.g. `DatabaseError` in
//! `esc-db`); the manager boxes them into [`CoreError::Store`]. Workflow
//! dispatch errors never reach this type.

use thiserror::Error;

/// Errors surfaced to callers of [`crate::manager::IssueManager`].
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The issue store failed.
    #[error("Store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CoreError {
    /// Box a store-specific error.
    pub fn store<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store(Box::new(error))
    }

    pub(crate) fn issue_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "issue".to_string(),
            id: id.to_string(),
        }
    }
}
