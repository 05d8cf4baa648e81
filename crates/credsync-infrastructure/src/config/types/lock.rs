//! Distributed lock configuration types

use credsync_domain::constants::{
    DEFAULT_LEASE_RENEW_FRACTION, DEFAULT_LOCK_LEASE, DEFAULT_LOCK_POLL_INTERVAL,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Distributed lock configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockConfig {
    /// Lease of the owner lock in milliseconds
    pub lease_ms: u64,

    /// How long to wait for a held lock; 0 returns immediately
    pub acquire_timeout_ms: u64,

    /// Interval between acquisition attempts while waiting
    pub poll_interval_ms: u64,

    /// Fraction of the lease after which a running refresh renews it
    pub renew_fraction: f64,
}

impl LockConfig {
    /// Lease as a duration
    pub fn lease(&self) -> Duration {
        Duration::from_millis(self.lease_ms)
    }

    /// Acquisition timeout, `None` when non-blocking
    pub fn acquire_timeout(&self) -> Option<Duration> {
        (self.acquire_timeout_ms > 0).then(|| Duration::from_millis(self.acquire_timeout_ms))
    }

    /// Poll interval as a duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            lease_ms: DEFAULT_LOCK_LEASE.as_millis() as u64,
            acquire_timeout_ms: 0,
            poll_interval_ms: DEFAULT_LOCK_POLL_INTERVAL.as_millis() as u64,
            renew_fraction: DEFAULT_LEASE_RENEW_FRACTION,
        }
    }
}
