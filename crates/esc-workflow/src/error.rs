//! Workflow dispatch error types.
//!
//! Every variant is terminal for a single dispatch attempt. The dispatcher logs
//! them; they never reach callers of the issue manager.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The token exchange failed (client credentials mode).
    #[error("token exchange failed: {0}")]
    Auth(String),

    /// Connection, timeout, or body-read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The workflow engine returned a non-success status.
    #[error("workflow engine returned {status}: {body}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The client could not be built from configuration.
    #[error("workflow client not configured: {0}")]
    NotConfigured(String),
}
