//! Credential source configuration types

use credsync_application::SourceMode;
use credsync_domain::constants::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};

/// Credential source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Coordination strategy (`local_only` or `shared_via_lock`)
    pub mode: SourceMode,

    /// Key namespace shared by every process of one deployment
    pub namespace: String,

    /// Default owner (application id) for operator commands
    pub owner_id: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::default(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            owner_id: None,
        }
    }
}
