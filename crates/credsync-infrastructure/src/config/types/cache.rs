//! Credential cache configuration types

use credsync_application::DEFAULT_LOCAL_MAX_ENTRIES;
use credsync_domain::constants::DEFAULT_CREDENTIAL_TTL_SECS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Credential cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Credential TTL in seconds, kept below the issuer's expiry
    pub ttl_secs: u64,

    /// Capacity of the in-process cache (`local_only` mode)
    pub max_entries: u64,
}

impl CacheConfig {
    /// TTL as a duration
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_CREDENTIAL_TTL_SECS,
            max_entries: DEFAULT_LOCAL_MAX_ENTRIES,
        }
    }
}
