//! Errors raised while loading or validating Escalate configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source (TOML file or `ESCALATE_*` env var) could not be extracted.
    #[error("failed to load escalate config: {0}")]
    Figment(#[from] figment::Error),

    /// A section is missing fields it needs to be used.
    #[error("[{section}] is incomplete, set: {missing}")]
    NotConfigured { section: String, missing: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
