//! Shared store configuration types

use serde::{Deserialize, Serialize};

/// Shared store backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreProvider {
    /// Process-local store, for tests and single-process deployments
    #[default]
    Memory,
    /// Redis server shared by every process
    Redis,
}

impl std::fmt::Display for StoreProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Redis => write!(f, "redis"),
        }
    }
}

/// Shared store configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend selection
    pub provider: StoreProvider,

    /// Redis connection URL, required for the redis provider
    pub redis_url: Option<String>,
}
