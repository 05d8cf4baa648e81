//! Distributed lock over a shared store
//!
//! Acquisition stores a fresh random token under the lock key with
//! set-if-absent semantics and a lease. Release and renewal are conditional on
//! that token, so a holder whose lease expired cannot free a lock that was
//! reacquired by another process.
//!
//! ## Example
//!
//! ```ignore
//! use credsync_application::DistributedLock;
//! use credsync_domain::ports::LockProvider;
//!
//! let lock = DistributedLock::new(store);
//! let handle = lock.acquire_lock("cred:app1:sync", Duration::from_secs(10), None).await?;
//! // ... critical section ...
//! lock.release_lock(handle).await?;
//! ```

use async_trait::async_trait;
use credsync_domain::constants::DEFAULT_LOCK_POLL_INTERVAL;
use credsync_domain::error::{Error, Result};
use credsync_domain::ports::{LockProvider, SharedStore};
use credsync_domain::value_objects::LockHandle;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, trace};
use uuid::Uuid;

/// Lease-based lock backed by a [`SharedStore`]
#[derive(Clone)]
pub struct DistributedLock {
    store: Arc<dyn SharedStore>,
    poll_interval: Duration,
}

impl DistributedLock {
    /// Create a lock provider polling every 100ms when blocking
    pub fn new(store: Arc<dyn SharedStore>) -> Self {
        Self {
            store,
            poll_interval: DEFAULT_LOCK_POLL_INTERVAL,
        }
    }

    /// Set the interval between acquisition attempts
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval.max(Duration::from_millis(1));
        self
    }

    /// Interval between acquisition attempts
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    fn new_token() -> String {
        Uuid::new_v4().to_string()
    }
}

#[async_trait]
impl LockProvider for DistributedLock {
    async fn acquire_lock(
        &self,
        key: &str,
        lease: Duration,
        timeout: Option<Duration>,
    ) -> Result<LockHandle> {
        if lease.is_zero() {
            return Err(Error::invalid_argument("lock lease must be greater than zero"));
        }

        let token = Self::new_token();
        let deadline = timeout
            .filter(|timeout| !timeout.is_zero())
            .map(|timeout| Instant::now() + timeout);

        loop {
            if self.store.acquire_if_absent(key, &token, lease).await? {
                debug!(lock_key = key, lease_ms = lease.as_millis() as u64, "Lock acquired");
                return Ok(LockHandle::new(key, token, lease));
            }

            let Some(deadline) = deadline else {
                trace!(lock_key = key, "Lock held elsewhere");
                return Err(Error::lock_contended(key));
            };

            let now = Instant::now();
            if now >= deadline {
                debug!(lock_key = key, "Lock acquisition timed out");
                return Err(Error::lock_contended(key));
            }
            tokio::time::sleep(self.poll_interval.min(deadline - now)).await;
        }
    }

    async fn renew_lock(&self, handle: &mut LockHandle) -> Result<bool> {
        let extended = self
            .store
            .extend_if_matches(&handle.key, &handle.token, handle.lease)
            .await?;
        if extended {
            handle.renewed();
            trace!(lock_key = %handle.key, "Lease renewed");
        }
        Ok(extended)
    }

    async fn release_lock(&self, handle: LockHandle) -> Result<bool> {
        let released = self
            .store
            .release_if_matches(&handle.key, &handle.token)
            .await?;
        if released {
            debug!(lock_key = %handle.key, "Lock released");
        } else {
            debug!(lock_key = %handle.key, "Lock already expired or taken over");
        }
        Ok(released)
    }
}

impl std::fmt::Debug for DistributedLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistributedLock")
            .field("store", &self.store.provider_name())
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}
