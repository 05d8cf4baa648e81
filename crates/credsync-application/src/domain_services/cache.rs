//! Credential cache
//!
//! Namespaced credential reads and writes on the shared store. Blank payloads
//! are never reported as hits: absence is always a miss.

use credsync_domain::error::{Error, Result};
use credsync_domain::ports::SharedStore;
use credsync_domain::value_objects::{CredentialKey, CredentialValue};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Credential view over a [`SharedStore`]
#[derive(Debug, Clone)]
pub struct CredentialCache {
    store: Arc<dyn SharedStore>,
}

impl CredentialCache {
    /// Wrap a shared store
    pub fn new(store: Arc<dyn SharedStore>) -> Self {
        Self { store }
    }

    /// Underlying store
    pub fn store(&self) -> &Arc<dyn SharedStore> {
        &self.store
    }

    /// Read a credential
    ///
    /// # Returns
    /// The cached value, or `None` if absent, expired or blank
    pub async fn read(&self, key: &CredentialKey) -> Result<Option<CredentialValue>> {
        let Some(raw) = self.store.get(&key.cache_key()).await? else {
            return Ok(None);
        };
        match CredentialValue::new(raw) {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                warn!(key = %key, "Blank credential in store treated as a miss");
                Ok(None)
            }
        }
    }

    /// Overwrite a credential with a time-to-live
    ///
    /// Last writer wins; callers only write while holding the owner lock.
    pub async fn write(
        &self,
        key: &CredentialKey,
        value: &CredentialValue,
        ttl: Duration,
    ) -> Result<()> {
        if ttl.is_zero() {
            return Err(Error::invalid_argument("credential TTL must be greater than zero"));
        }
        self.store
            .set_with_expiry(&key.cache_key(), value.as_str(), ttl)
            .await?;
        debug!(key = %key, ttl_secs = ttl.as_secs(), "Credential stored");
        Ok(())
    }
}
