//! Lock handle value object

use std::time::Duration;

/// Proof of a successful lock acquisition
///
/// The `token` is random and unique per acquisition attempt. Only the holder
/// of the matching token can release or renew the lock (fencing). The store
/// alone decides when the lease has run out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockHandle {
    /// Lock key
    pub key: String,
    /// Unique token for this lock acquisition
    pub token: String,
    /// Lease granted at acquisition and at every renewal
    pub lease: Duration,
    /// Successful renewals since acquisition
    pub renewals: u32,
}

impl LockHandle {
    /// Create a handle for a freshly granted lease
    pub fn new<K: Into<String>, T: Into<String>>(key: K, token: T, lease: Duration) -> Self {
        Self {
            key: key.into(),
            token: token.into(),
            lease,
            renewals: 0,
        }
    }

    /// Record a successful renewal
    pub fn renewed(&mut self) {
        self.renewals = self.renewals.saturating_add(1);
    }
}
