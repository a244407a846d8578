//! # esc-config
//!
//! Layered configuration loading for Escalate using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ESCALATE_*` prefix, `__` as separator)
//! 2. Project-level `.escalate/config.toml`
//! 3. User-level `~/.config/escalate/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `ESCALATE_WORKFLOW__BASE_URL` -> `workflow.base_url`,
//! `ESCALATE_STORE__PATH` -> `store.path`, and so on.
//!
//! # Usage
//!
//! ```no_run
//! use esc_config::EscConfig;
//!
//! let config = EscConfig::load_with_dotenv().expect("config");
//! if config.workflow.is_configured() {
//!     println!("Workflow engine: {}", config.workflow.base_url);
//! }
//! ```

mod error;
mod lifecycle;
mod store;
mod workflow;

pub use error::ConfigError;
pub use lifecycle::LifecycleConfig;
pub use store::StoreConfig;
pub use workflow::{AuthMode, WorkflowConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "ESCALATE_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EscConfig {
    #[serde(default)]
    pub workflow: WorkflowConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub lifecycle: LifecycleConfig,
}

impl EscConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the current directory (or an ancestor) first, then
    /// [`Self::load`]. Values already in the process environment win over `.env`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or layer more providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".escalate/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("escalate").join("config.toml"))
    }
}
