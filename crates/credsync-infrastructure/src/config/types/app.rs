//! Main application configuration

use super::{CacheConfig, LockConfig, LoggingConfig, SourceConfig, StoreConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
///
/// ```toml
/// [source]
/// mode = "shared_via_lock"
/// namespace = "cred"
/// owner_id = "wx1234567890"
///
/// [store]
/// provider = "redis"
/// redis_url = "redis://127.0.0.1:6379"
///
/// [lock]
/// lease_ms = 10000
/// acquire_timeout_ms = 0
///
/// [cache]
/// ttl_secs = 7100
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Credential source selection
    #[serde(default)]
    pub source: SourceConfig,

    /// Shared store backend
    #[serde(default)]
    pub store: StoreConfig,

    /// Distributed lock timing
    #[serde(default)]
    pub lock: LockConfig,

    /// Credential cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
