//! Lock Provider Port
//!
//! Defines the contract for the mutual-exclusion primitive guarding a refresh.

use crate::error::Result;
use crate::value_objects::LockHandle;
use async_trait::async_trait;
use std::time::Duration;

/// Lease-based lock provider interface
#[async_trait]
pub trait LockProvider: Send + Sync {
    /// Acquire the lock for `key`
    ///
    /// With `timeout` of `None` (or zero) a single attempt is made. Otherwise
    /// acquisition is retried until the timeout elapses. If the returned future
    /// is dropped after the store already granted the lock, that lock stays
    /// held until its lease expires.
    ///
    /// # Errors
    /// [`Error::LockContended`](crate::Error::LockContended) when another
    /// holder is active for the whole attempt window.
    async fn acquire_lock(
        &self,
        key: &str,
        lease: Duration,
        timeout: Option<Duration>,
    ) -> Result<LockHandle>;

    /// Extend the lease of a held lock
    ///
    /// Returns false if the lease was already lost.
    async fn renew_lock(&self, handle: &mut LockHandle) -> Result<bool>;

    /// Release a lock; releasing an expired or released handle is a no-op
    ///
    /// Returns whether this call actually deleted the lock.
    async fn release_lock(&self, handle: LockHandle) -> Result<bool>;
}
