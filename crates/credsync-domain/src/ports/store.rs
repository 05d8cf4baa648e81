//! Shared Store Port
//!
//! Thin contract over a remote key/value backend shared by every process.
//! Every operation must be atomic with respect to concurrent callers across
//! processes. Failures surface as [`Error::StoreUnavailable`](crate::Error::StoreUnavailable)
//! and must not be assumed transient.
//!
//! ## Implementations
//!
//! - **Redis**: `SET NX PX` for acquisition, Lua compare-and-delete for release
//! - **In-memory**: single-process store for tests and `LocalOnly` setups

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Atomic key/value primitives the coordinator is built on
#[async_trait]
pub trait SharedStore: Send + Sync + std::fmt::Debug {
    /// Read a value; `None` when absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value unconditionally with a time-to-live
    async fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Store `token` under `key` only if the key is absent
    ///
    /// # Returns
    /// True if this call created the key (lock taken), false if it is held
    async fn acquire_if_absent(&self, key: &str, token: &str, lease: Duration) -> Result<bool>;

    /// Delete `key` only if it still holds `token`
    ///
    /// # Returns
    /// True if the key was deleted, false if it expired or belongs to someone else
    async fn release_if_matches(&self, key: &str, token: &str) -> Result<bool>;

    /// Reset the expiry of `key` to `lease` only if it still holds `token`
    ///
    /// # Returns
    /// True if the lease was extended, false if it was lost
    async fn extend_if_matches(&self, key: &str, token: &str, lease: Duration) -> Result<bool>;

    /// Identifier of the backend (e.g. "redis", "memory")
    fn provider_name(&self) -> &str;
}
