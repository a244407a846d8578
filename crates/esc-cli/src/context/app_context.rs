use std::time::Duration;

use anyhow::Context;
use esc_config::{EscConfig, WorkflowConfig};
use esc_core::lifecycle::TransitionPolicy;
use esc_core::manager::IssueManager;
use esc_db::EscDb;
use esc_workflow::{WorkflowClient, WorkflowDispatcher};

/// Issue manager as wired by the binary. `None` disables workflow dispatch.
pub type EscManager = IssueManager<EscDb, Option<WorkflowDispatcher>>;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub manager: EscManager,
    pub config: EscConfig,
}

impl AppContext {
    pub async fn init(config: EscConfig) -> anyhow::Result<Self> {
        let db = EscDb::open_local(&config.store.path)
            .await
            .with_context(|| format!("failed to open issue store at {}", config.store.path))?;

        let dispatcher = build_dispatcher(&config.workflow)?;
        let policy = TransitionPolicy::from_strict(config.lifecycle.strict_transitions);
        let manager = IssueManager::new(db, dispatcher).with_policy(policy);

        Ok(Self { manager, config })
    }

    /// Give in-flight dispatches up to `workflow.shutdown_grace_secs` to finish.
    pub async fn shutdown(&self) {
        if let Some(dispatcher) = self.manager.notifier() {
            let grace = Duration::from_secs(self.config.workflow.shutdown_grace_secs);
            dispatcher.shutdown(grace).await;
        }
    }
}

fn build_dispatcher(config: &WorkflowConfig) -> anyhow::Result<Option<WorkflowDispatcher>> {
    if !config.is_configured() {
        tracing::warn!("workflow engine not configured; new issues will not start workflows");
        return Ok(None);
    }

    let client = WorkflowClient::from_config(config).context("invalid workflow configuration")?;
    tracing::debug!(
        url = %client.instances_url(),
        auth_mode = client.auth().mode_name(),
        "workflow dispatch enabled"
    );
    Ok(Some(WorkflowDispatcher::new(client)))
}

#[cfg(test)]
mod tests {
    use esc_config::{AuthMode, EscConfig, StoreConfig, WorkflowConfig};
    use esc_core::lifecycle::TransitionPolicy;
    use pretty_assertions::assert_eq;

    use super::{AppContext, build_dispatcher};

    fn in_memory() -> EscConfig {
        EscConfig {
            store: StoreConfig {
                path: String::from(":memory:"),
            },
            ..Default::default()
        }
    }

    #[test]
    fn unconfigured_workflow_disables_dispatch() {
        assert!(build_dispatcher(&WorkflowConfig::default()).unwrap().is_none());
    }

    #[test]
    fn incomplete_client_credentials_fail_fast() {
        let config = WorkflowConfig {
            base_url: String::from("https://spa.example.com"),
            api_key: String::from("key-1"),
            definition_id: String::from("def"),
            auth_mode: AuthMode::ClientCredentials,
            ..Default::default()
        };
        assert!(build_dispatcher(&config).is_err());
    }

    #[tokio::test]
    async fn strict_transitions_reach_the_manager() {
        let mut config = in_memory();
        config.lifecycle.strict_transitions = true;

        let ctx = AppContext::init(config).await.unwrap();
        assert_eq!(ctx.manager.policy(), TransitionPolicy::Strict);
        assert!(ctx.manager.notifier().is_none());
        ctx.shutdown().await;
    }
}
