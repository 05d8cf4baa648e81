//! Process-local credential source (`LocalOnly`)
//!
//! Keeps credentials in an in-process Moka cache. Concurrent misses for the
//! same key inside this process share a single refresh; nothing is
//! coordinated with other processes.

use crate::domain_services::ChangeNotifier;
use crate::ports::{CredentialSource, RefreshFn, SourceMode};
use async_trait::async_trait;
use credsync_domain::constants::DEFAULT_CREDENTIAL_TTL_SECS;
use credsync_domain::error::{Error, Result};
use credsync_domain::events::ChangeEvent;
use credsync_domain::value_objects::{CredentialKey, CredentialValue};
use moka::future::Cache;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default number of cached credentials
pub const DEFAULT_LOCAL_MAX_ENTRIES: u64 = 1024;

/// In-process credential source
pub struct LocalCredentialSource {
    cache: Cache<CredentialKey, CredentialValue>,
    notifier: ChangeNotifier,
    ttl: Duration,
}

impl LocalCredentialSource {
    /// Create a source with the default TTL and capacity
    pub fn new() -> Self {
        Self::with_config(
            Duration::from_secs(DEFAULT_CREDENTIAL_TTL_SECS),
            DEFAULT_LOCAL_MAX_ENTRIES,
        )
    }

    /// Create a source with a custom TTL and capacity
    pub fn with_config(ttl: Duration, max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self {
            cache,
            notifier: ChangeNotifier::new(),
            ttl,
        }
    }

    /// TTL applied to cached credentials
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for LocalCredentialSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialSource for LocalCredentialSource {
    async fn get_or_refresh(
        &self,
        key: &CredentialKey,
        refresh: RefreshFn,
    ) -> Result<CredentialValue> {
        if let Some(value) = self.cache.get(key).await {
            debug!(key = %key, "Local credential hit");
            return Ok(value);
        }

        // Only the caller whose init future runs performs the refresh
        let refreshed = AtomicBool::new(false);
        let result = self
            .cache
            .try_get_with(key.clone(), async {
                refreshed.store(true, Ordering::Release);
                let raw = refresh().await.map_err(Error::into_refresh_failure)?;
                CredentialValue::new(raw).map_err(|_| {
                    Error::refresh_failed(format!("issuer returned an empty credential for {key}"))
                })
            })
            .await;

        match result {
            Ok(value) => {
                if refreshed.load(Ordering::Acquire) {
                    info!(key = %key, "Local credential refreshed");
                    self.notifier.publish(&ChangeEvent::refreshed(key, value.clone()));
                }
                Ok(value)
            }
            Err(shared) => {
                let error = Arc::try_unwrap(shared)
                    .unwrap_or_else(|shared| Error::refresh_failed(shared.to_string()));
                warn!(key = %key, error = %error, "Local credential refresh failed");
                Err(error)
            }
        }
    }

    async fn peek(&self, key: &CredentialKey) -> Result<Option<CredentialValue>> {
        Ok(self.cache.get(key).await)
    }

    fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    fn mode(&self) -> SourceMode {
        SourceMode::LocalOnly
    }
}

impl std::fmt::Debug for LocalCredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalCredentialSource")
            .field("ttl", &self.ttl)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
