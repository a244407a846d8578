//! Authentication strategies for the workflow engine.

use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::error::WorkflowError;
use crate::http::check_response;

/// Form body for the client credentials grant.
const CLIENT_CREDENTIALS_FORM: &str = "grant_type=client_credentials";

/// OAuth client credentials for the token exchange.
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
}

/// How each dispatch authenticates. Selected once from configuration.
#[derive(Debug, Clone)]
pub enum WorkflowAuth {
    /// Present the configured API key as the bearer token.
    ApiKey,
    /// Fetch a fresh bearer token for every dispatch.
    ClientCredentials(ClientCredentials),
}

impl WorkflowAuth {
    #[must_use]
    pub const fn mode_name(&self) -> &'static str {
        match self {
            Self::ApiKey => "api_key",
            Self::ClientCredentials(_) => "client_credentials",
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange client credentials for an access token.
///
/// # Errors
///
/// Every failure (transport, non-success status, unparseable body) is reported
/// as [`WorkflowError::Auth`].
pub async fn fetch_token(
    http: &reqwest::Client,
    credentials: &ClientCredentials,
) -> Result<String, WorkflowError> {
    tracing::debug!(token_url = %credentials.token_url, "fetching OAuth token");

    let resp = http
        .post(&credentials.token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(CLIENT_CREDENTIALS_FORM)
        .send()
        .await
        .map_err(|e| WorkflowError::Auth(format!("request: {e}")))?;

    let resp = check_response(resp).await.map_err(|e| match e {
        WorkflowError::Remote { status, body } => {
            WorkflowError::Auth(format!("token endpoint returned {status}: {body}"))
        }
        other => WorkflowError::Auth(other.to_string()),
    })?;

    let token = resp
        .json::<TokenResponse>()
        .await
        .map_err(|e| WorkflowError::Auth(format!("parse token response: {e}")))?;

    tracing::debug!("OAuth token retrieved");
    Ok(token.access_token)
}
