//! Workflow engine configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default timeout for each outbound HTTP call, in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

/// Default time the CLI waits for in-flight dispatches before exiting.
const fn default_shutdown_grace_secs() -> u64 {
    5
}

/// How the dispatcher authenticates against the workflow engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Present the API key directly; no token exchange.
    #[default]
    ApiKey,
    /// Exchange client id/secret for a bearer token before each dispatch.
    ClientCredentials,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkflowConfig {
    /// Engine base URL, without the `/public/workflow/...` path.
    #[serde(default)]
    pub base_url: String,

    /// Sent as `X-Environment-Id`.
    #[serde(default)]
    pub environment_id: String,

    /// Sent as `X-API-Key` (and as the bearer token in API key mode).
    #[serde(default)]
    pub api_key: String,

    /// Workflow definition started for each new issue.
    #[serde(default)]
    pub definition_id: String,

    #[serde(default)]
    pub auth_mode: AuthMode,

    /// OAuth client id (client credentials mode).
    #[serde(default)]
    pub client_id: String,

    /// OAuth client secret (client credentials mode).
    #[serde(default)]
    pub client_secret: String,

    /// OAuth token endpoint (client credentials mode).
    #[serde(default)]
    pub token_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_shutdown_grace_secs")]
    pub shutdown_grace_secs: u64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            environment_id: String::new(),
            api_key: String::new(),
            definition_id: String::new(),
            auth_mode: AuthMode::default(),
            client_id: String::new(),
            client_secret: String::new(),
            token_url: String::new(),
            timeout_secs: default_timeout_secs(),
            shutdown_grace_secs: default_shutdown_grace_secs(),
        }
    }
}

impl WorkflowConfig {
    /// Check if the minimum fields for any dispatch are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.definition_id.is_empty() && !self.api_key.is_empty()
    }

    /// Check if client credentials are complete.
    #[must_use]
    pub fn has_client_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty() && !self.token_url.is_empty()
    }

    /// Validate the section for the selected auth mode.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` if required fields are missing, or
    /// `ConfigError::InvalidValue` for a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "workflow".to_string(),
                missing: "base_url, definition_id, api_key".to_string(),
            });
        }
        if self.auth_mode == AuthMode::ClientCredentials && !self.has_client_credentials() {
            return Err(ConfigError::NotConfigured {
                section: "workflow".to_string(),
                missing: "client_id, client_secret, token_url".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "workflow.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
