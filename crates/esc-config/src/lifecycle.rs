//! Issue lifecycle policy.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LifecycleConfig {
    /// Reject status changes outside the transition table instead of logging them.
    #[serde(default)]
    pub strict_transitions: bool,
}
