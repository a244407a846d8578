//! Shared HTTP response checks for the token and workflow endpoints.

use crate::error::WorkflowError;

/// Return the response unchanged on success; otherwise read the body into
/// [`WorkflowError::Remote`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, WorkflowError> {
    if !resp.status().is_success() {
        return Err(WorkflowError::Remote {
            status: resp.status().as_u16(),
            body: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
