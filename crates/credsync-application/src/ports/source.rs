//! Credential Source Port
//!
//! Strategy selected at construction that decides how a missing credential is
//! refreshed: coordinated across processes through a shared store and a
//! distributed lock, or kept inside the current process.

use crate::domain_services::ChangeNotifier;
use async_trait::async_trait;
use credsync_domain::error::Result;
use credsync_domain::value_objects::{CredentialKey, CredentialValue};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Future returned by a refresh function: the raw issuer payload or an error
pub type RefreshFuture = BoxFuture<'static, Result<String>>;

/// Caller-supplied refresh function, invoked at most once per lock acquisition
pub type RefreshFn = Box<dyn FnOnce() -> RefreshFuture + Send>;

/// Box an async closure into a [`RefreshFn`]
///
/// # Example
///
/// ```ignore
/// let value = source
///     .get_or_refresh(&key, refresh_with(|| async { issuer_call().await }))
///     .await?;
/// ```
pub fn refresh_with<F, Fut>(refresh: F) -> RefreshFn
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<String>> + Send + 'static,
{
    Box::new(move || Box::pin(refresh()))
}

/// How credentials are coordinated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceMode {
    /// Credentials live in this process only
    LocalOnly,
    /// Credentials are shared through a store and refreshed under a distributed lock
    #[default]
    SharedViaLock,
}

/// Credential source interface
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Return the cached credential, refreshing it with `refresh` on a miss
    ///
    /// # Errors
    /// - `NotYetAvailable` when another holder is refreshing and nothing is cached
    /// - `RefreshFailed` when `refresh` failed or returned a blank value
    /// - `StoreUnavailable` when a required store read or write failed
    async fn get_or_refresh(&self, key: &CredentialKey, refresh: RefreshFn)
    -> Result<CredentialValue>;

    /// Read the cached credential without refreshing
    async fn peek(&self, key: &CredentialKey) -> Result<Option<CredentialValue>>;

    /// Event bus receiving one event per successful refresh
    fn notifier(&self) -> &ChangeNotifier;

    /// Coordination strategy of this source
    fn mode(&self) -> SourceMode;
}
