//! Source Factory
//!
//! Builds shared stores and credential sources from configuration.
//!
//! **All store implementations come from the credsync-providers crate.**
//! This module only handles wiring.

use std::sync::Arc;

use credsync_application::{
    CredentialIssuer, CredentialManager, CredentialSource, LocalCredentialSource,
    RefreshCoordinator, RefreshSettings, SourceMode,
};
use credsync_domain::error::{Error, Result};
use credsync_domain::ports::SharedStore;
use credsync_providers::store::{InMemorySharedStore, RedisSharedStore};
use tracing::info;

use crate::config::{AppConfig, StoreConfig, StoreProvider, validate_app_config};

/// Factory for creating shared stores
pub struct SharedStoreFactory;

impl SharedStoreFactory {
    /// Create a shared store based on configuration
    ///
    /// No connection is opened here; the redis store connects on first use.
    pub fn create(config: &StoreConfig) -> Result<Arc<dyn SharedStore>> {
        match config.provider {
            StoreProvider::Memory => Ok(InMemorySharedStore::new_shared()),
            StoreProvider::Redis => {
                let url = config.redis_url.as_deref().ok_or_else(|| {
                    Error::configuration("Redis URL is required when the store provider is redis")
                })?;
                Ok(Arc::new(RedisSharedStore::new(url)?))
            }
        }
    }
}

/// Factory for creating credential sources
pub struct CredentialSourceFactory;

impl CredentialSourceFactory {
    /// Refresh protocol timing derived from configuration
    pub fn refresh_settings(config: &AppConfig) -> RefreshSettings {
        RefreshSettings {
            lease: config.lock.lease(),
            acquire_timeout: config.lock.acquire_timeout(),
            poll_interval: config.lock.poll_interval(),
            renew_fraction: config.lock.renew_fraction,
            credential_ttl: config.cache.ttl(),
        }
    }

    /// Create the credential source selected by `source.mode`
    pub fn create(config: &AppConfig) -> Result<Arc<dyn CredentialSource>> {
        validate_app_config(config)?;
        match config.source.mode {
            SourceMode::LocalOnly => Ok(Self::create_local(config)),
            SourceMode::SharedViaLock => {
                let store = SharedStoreFactory::create(&config.store)?;
                Ok(Self::create_shared(config, store))
            }
        }
    }

    /// Create a `SharedViaLock` source over an existing store
    pub fn create_shared(
        config: &AppConfig,
        store: Arc<dyn SharedStore>,
    ) -> Arc<dyn CredentialSource> {
        info!(
            store = store.provider_name(),
            lease_ms = config.lock.lease_ms,
            "Creating shared credential source"
        );
        Arc::new(RefreshCoordinator::new(store, Self::refresh_settings(config)))
    }

    /// Create a `LocalOnly` source
    pub fn create_local(config: &AppConfig) -> Arc<dyn CredentialSource> {
        info!(
            max_entries = config.cache.max_entries,
            "Creating process-local credential source"
        );
        Arc::new(LocalCredentialSource::with_config(
            config.cache.ttl(),
            config.cache.max_entries,
        ))
    }

    /// Create a credential manager for one owner
    ///
    /// Uses `owner_id` when given, otherwise the configured `source.owner_id`.
    pub fn create_manager(
        config: &AppConfig,
        owner_id: Option<&str>,
        issuer: Arc<dyn CredentialIssuer>,
    ) -> Result<CredentialManager> {
        let owner_id = owner_id
            .or(config.source.owner_id.as_deref())
            .ok_or_else(|| Error::configuration("No owner id given and source.owner_id is unset"))?;
        let source = Self::create(config)?;
        CredentialManager::new(config.source.namespace.clone(), owner_id, source, issuer)
    }
}
