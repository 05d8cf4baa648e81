//! Refresh Coordinator Use Case
//!
//! Cache-aside with a distributed lock, shared by every process pointing at
//! the same store:
//!
//! ```text
//! CheckCache   --hit-->  return
//!              --miss--> AcquireLock
//! AcquireLock  --contended--> re-read cache: value or NotYetAvailable
//!              --acquired-->  RecheckCache
//! RecheckCache --hit-->  release, return
//!              --miss--> Refresh
//! Refresh      --ok-->   store, notify, release, return
//!              --err-->  release, RefreshFailed
//! ```
//!
//! The recheck under the lock is what collapses N concurrent misses into a
//! single refresh. While the refresh function runs, the lease is renewed
//! periodically so a slow issuer does not let a second holder in.

use crate::domain_services::{ChangeNotifier, CredentialCache, DistributedLock};
use crate::ports::{CredentialSource, RefreshFn, SourceMode};
use async_trait::async_trait;
use credsync_domain::constants::{
    DEFAULT_CREDENTIAL_TTL_SECS, DEFAULT_LEASE_RENEW_FRACTION, DEFAULT_LOCK_LEASE,
    DEFAULT_LOCK_POLL_INTERVAL,
};
use credsync_domain::error::{Error, Result};
use credsync_domain::events::ChangeEvent;
use credsync_domain::ports::{LockProvider, SharedStore};
use credsync_domain::value_objects::{CredentialKey, CredentialValue, LockHandle};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Floor for the renewal interval
const MIN_RENEW_INTERVAL: Duration = Duration::from_millis(10);

/// `interval_at` rejects a zero period
const MIN_TICK: Duration = Duration::from_nanos(1);

/// Timing knobs of the refresh protocol
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshSettings {
    /// Lease of the owner lock
    pub lease: Duration,
    /// How long to wait for a held lock; `None` returns immediately
    pub acquire_timeout: Option<Duration>,
    /// Interval between acquisition attempts while waiting
    pub poll_interval: Duration,
    /// Fraction of the lease after which a running refresh renews it
    pub renew_fraction: f64,
    /// TTL of stored credentials
    pub credential_ttl: Duration,
}

impl RefreshSettings {
    /// Renewal interval derived from the lease
    ///
    /// The fraction is clamped to `[0.1, 0.9]` and the result never drops
    /// below [`MIN_RENEW_INTERVAL`], except for leases too short to afford
    /// it: those renew at half the lease.
    pub fn renew_interval(&self) -> Duration {
        let interval = self.lease.mul_f64(self.renew_fraction.clamp(0.1, 0.9));
        let floor = MIN_RENEW_INTERVAL.min(self.lease / 2);
        interval.max(floor).max(MIN_TICK)
    }

    /// Set the acquisition timeout
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = Some(timeout);
        self
    }

    /// Set the lock lease
    pub fn with_lease(mut self, lease: Duration) -> Self {
        self.lease = lease;
        self
    }

    /// Set the credential TTL
    pub fn with_credential_ttl(mut self, ttl: Duration) -> Self {
        self.credential_ttl = ttl;
        self
    }
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            lease: DEFAULT_LOCK_LEASE,
            acquire_timeout: None,
            poll_interval: DEFAULT_LOCK_POLL_INTERVAL,
            renew_fraction: DEFAULT_LEASE_RENEW_FRACTION,
            credential_ttl: Duration::from_secs(DEFAULT_CREDENTIAL_TTL_SECS),
        }
    }
}

/// Cross-process credential source (`SharedViaLock`)
pub struct RefreshCoordinator {
    cache: CredentialCache,
    lock: Arc<dyn LockProvider>,
    notifier: ChangeNotifier,
    settings: RefreshSettings,
}

impl RefreshCoordinator {
    /// Create a coordinator locking through the same store it caches in
    pub fn new(store: Arc<dyn SharedStore>, settings: RefreshSettings) -> Self {
        let lock =
            DistributedLock::new(Arc::clone(&store)).with_poll_interval(settings.poll_interval);
        Self::with_lock_provider(store, Arc::new(lock), settings)
    }

    /// Create a coordinator with an explicit lock provider
    pub fn with_lock_provider(
        store: Arc<dyn SharedStore>,
        lock: Arc<dyn LockProvider>,
        settings: RefreshSettings,
    ) -> Self {
        Self {
            cache: CredentialCache::new(store),
            lock,
            notifier: ChangeNotifier::new(),
            settings,
        }
    }

    /// Timing settings
    pub fn settings(&self) -> &RefreshSettings {
        &self.settings
    }

    /// Credential cache used by this coordinator
    pub fn cache(&self) -> &CredentialCache {
        &self.cache
    }

    /// Someone else holds the lock: serve whatever is cached right now
    async fn on_contended(&self, key: &CredentialKey) -> Result<CredentialValue> {
        match self.cache.read(key).await? {
            Some(value) => {
                debug!(key = %key, "Lock contended, serving value stored by the holder");
                Ok(value)
            }
            None => {
                debug!(key = %key, "Lock contended and nothing cached yet");
                Err(Error::not_yet_available(key.cache_key()))
            }
        }
    }

    async fn refresh_under_lock(
        &self,
        key: &CredentialKey,
        handle: &mut LockHandle,
        refresh: RefreshFn,
    ) -> Result<CredentialValue> {
        if let Some(value) = self.cache.read(key).await? {
            debug!(key = %key, "Credential populated while waiting for the lock");
            return Ok(value);
        }

        let raw = self
            .run_refresh(handle, refresh)
            .await
            .map_err(Error::into_refresh_failure)?;
        let value = CredentialValue::new(raw).map_err(|_| {
            Error::refresh_failed(format!("issuer returned an empty credential for {key}"))
        })?;

        self.cache
            .write(key, &value, self.settings.credential_ttl)
            .await?;
        info!(key = %key, "Credential refreshed");

        self.notifier.publish(&ChangeEvent::refreshed(key, value.clone()));
        Ok(value)
    }

    /// Drive the refresh function, renewing the lease until it completes
    async fn run_refresh(&self, handle: &mut LockHandle, refresh: RefreshFn) -> Result<String> {
        let every = self.settings.renew_interval();
        let mut renewals = tokio::time::interval_at(Instant::now() + every, every);
        renewals.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let refresh = refresh();
        tokio::pin!(refresh);

        loop {
            tokio::select! {
                biased;
                result = &mut refresh => return result,
                _ = renewals.tick() => self.renew(handle).await,
            }
        }
    }

    async fn renew(&self, handle: &mut LockHandle) {
        match self.lock.renew_lock(handle).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(
                    lock_key = %handle.key,
                    "Lease lost while refreshing; another holder may refresh concurrently"
                );
            }
            Err(e) => {
                warn!(lock_key = %handle.key, error = %e, "Lease renewal failed");
            }
        }
    }

    /// Best-effort release; the lease bounds the damage if this fails
    async fn release(&self, handle: LockHandle) {
        let lock_key = handle.key.clone();
        match self.lock.release_lock(handle).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(lock_key = %lock_key, "Lock expired before release");
            }
            Err(e) => {
                warn!(lock_key = %lock_key, error = %e, "Lock release failed; lease will expire");
            }
        }
    }
}

#[async_trait]
impl CredentialSource for RefreshCoordinator {
    async fn get_or_refresh(
        &self,
        key: &CredentialKey,
        refresh: RefreshFn,
    ) -> Result<CredentialValue> {
        if let Some(value) = self.cache.read(key).await? {
            debug!(key = %key, "Credential cache hit");
            return Ok(value);
        }
        debug!(key = %key, "Credential cache miss");

        let lock_key = key.lock_key();
        let mut handle = match self
            .lock
            .acquire_lock(&lock_key, self.settings.lease, self.settings.acquire_timeout)
            .await
        {
            Ok(handle) => handle,
            Err(Error::LockContended { .. }) => return self.on_contended(key).await,
            Err(e) => return Err(e),
        };

        let outcome = self.refresh_under_lock(key, &mut handle, refresh).await;
        self.release(handle).await;

        if let Err(e) = &outcome
            && matches!(e, Error::RefreshFailed { .. })
        {
            warn!(key = %key, error = %e, "Credential refresh failed");
        }
        outcome
    }

    async fn peek(&self, key: &CredentialKey) -> Result<Option<CredentialValue>> {
        self.cache.read(key).await
    }

    fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    fn mode(&self) -> SourceMode {
        SourceMode::SharedViaLock
    }
}

impl std::fmt::Debug for RefreshCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshCoordinator")
            .field("store", &self.cache.store().provider_name())
            .field("settings", &self.settings)
            .field("notifier", &self.notifier)
            .finish()
    }
}
