//! HTTP client for the workflow engine's public REST API.

use std::time::Duration;

use esc_config::{AuthMode, WorkflowConfig};
use esc_core::entities::Issue;

use crate::auth::{self, ClientCredentials, WorkflowAuth};
use crate::error::WorkflowError;
use crate::http::check_response;
use crate::payload::WorkflowInstanceRequest;

/// Path of the workflow-instance endpoint, relative to the base URL.
pub const INSTANCES_PATH: &str = "/public/workflow/rest/v1/workflow-instances";

const ENVIRONMENT_HEADER: &str = "X-Environment-Id";
const API_KEY_HEADER: &str = "X-API-Key";

/// Starts workflow instances for issues. Holds no per-issue state.
#[derive(Debug, Clone)]
pub struct WorkflowClient {
    http: reqwest::Client,
    base_url: String,
    environment_id: String,
    api_key: String,
    definition_id: String,
    auth: WorkflowAuth,
}

impl WorkflowClient {
    /// Build a client from a validated `workflow` config section.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::NotConfigured`] if the section is incomplete
    /// for its auth mode or the HTTP client cannot be built.
    pub fn from_config(config: &WorkflowConfig) -> Result<Self, WorkflowError> {
        config
            .validate()
            .map_err(|e| WorkflowError::NotConfigured(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("escalate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WorkflowError::NotConfigured(format!("http client: {e}")))?;

        let auth = match config.auth_mode {
            AuthMode::ApiKey => WorkflowAuth::ApiKey,
            AuthMode::ClientCredentials => WorkflowAuth::ClientCredentials(ClientCredentials {
                client_id: config.client_id.clone(),
                client_secret: config.client_secret.clone(),
                token_url: config.token_url.clone(),
            }),
        };

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            environment_id: config.environment_id.clone(),
            api_key: config.api_key.clone(),
            definition_id: config.definition_id.clone(),
            auth,
        })
    }

    #[must_use]
    pub const fn auth(&self) -> &WorkflowAuth {
        &self.auth
    }

    #[must_use]
    pub fn instances_url(&self) -> String {
        format!("{}{INSTANCES_PATH}", self.base_url.trim_end_matches('/'))
    }

    #[must_use]
    pub fn build_request(&self, issue: &Issue) -> WorkflowInstanceRequest {
        WorkflowInstanceRequest::for_issue(&self.definition_id, issue)
    }

    /// Start one workflow instance for `issue`. Returns the engine's response
    /// body. Makes exactly one attempt; no retries.
    ///
    /// # Errors
    ///
    /// - [`WorkflowError::Auth`] if the token exchange fails (the workflow
    ///   endpoint is then never called)
    /// - [`WorkflowError::Transport`] on connection failure or timeout
    /// - [`WorkflowError::Remote`] on a non-success status
    pub async fn start_workflow(&self, issue: &Issue) -> Result<String, WorkflowError> {
        let bearer = match &self.auth {
            WorkflowAuth::ApiKey => self.api_key.clone(),
            WorkflowAuth::ClientCredentials(credentials) => {
                auth::fetch_token(&self.http, credentials).await?
            }
        };

        let url = self.instances_url();
        tracing::debug!(
            issue_id = %issue.id,
            url = %url,
            auth_mode = self.auth.mode_name(),
            "starting workflow instance"
        );

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&bearer)
            .header(ENVIRONMENT_HEADER, &self.environment_id)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&self.build_request(issue))
            .send()
            .await?;

        let resp = check_response(resp).await?;
        Ok(resp.text().await?)
    }
}
