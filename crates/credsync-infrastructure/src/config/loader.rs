//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::{AppConfig, StoreProvider};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use credsync_domain::constants::KEY_SEPARATOR;
use credsync_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `CREDSYNC__LOCK__LEASE_MS`)
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.exists() {
                log_config_loaded(config_path, false);
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            figment = figment.merge(Toml::file(config_path));
            log_config_loaded(config_path, true);
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore keeps `CREDSYNC_LOG` out of the configuration tree
        let prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = to_toml(config)?;
        std::fs::write(path.as_ref(), toml_string).config_context("Failed to write config file")
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    ///
    /// Looks in the working directory, `./credsync/`, the user config
    /// directory and `~/.credsync/`, in that order.
    pub fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a configuration as pretty TOML
pub fn to_toml(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_source_config(config)?;
    validate_store_config(config)?;
    validate_lock_config(config)?;
    validate_cache_config(config)?;
    Ok(())
}

fn validate_source_config(config: &AppConfig) -> Result<()> {
    let namespace = &config.source.namespace;
    if namespace.trim().is_empty() {
        return Err(Error::configuration("Namespace cannot be empty"));
    }
    if namespace.contains(KEY_SEPARATOR) {
        return Err(Error::configuration(format!(
            "Namespace '{namespace}' cannot contain '{KEY_SEPARATOR}'"
        )));
    }
    if let Some(owner_id) = &config.source.owner_id
        && (owner_id.trim().is_empty() || owner_id.contains(KEY_SEPARATOR))
    {
        return Err(Error::configuration(format!(
            "Owner id '{owner_id}' must be non-empty and cannot contain '{KEY_SEPARATOR}'"
        )));
    }
    Ok(())
}

fn validate_store_config(config: &AppConfig) -> Result<()> {
    if config.store.provider == StoreProvider::Redis
        && config
            .store
            .redis_url
            .as_deref()
            .is_none_or(|url| url.trim().is_empty())
    {
        return Err(Error::configuration(
            "Redis URL is required when the store provider is redis",
        ));
    }
    Ok(())
}

fn validate_lock_config(config: &AppConfig) -> Result<()> {
    let lock = &config.lock;
    if lock.lease_ms == 0 {
        return Err(Error::configuration("Lock lease cannot be 0"));
    }
    if lock.poll_interval_ms == 0 {
        return Err(Error::configuration("Lock poll interval cannot be 0"));
    }
    if !(lock.renew_fraction > 0.0 && lock.renew_fraction < 1.0) {
        return Err(Error::configuration(format!(
            "Lease renew fraction must be between 0 and 1 (exclusive), got {}",
            lock.renew_fraction
        )));
    }
    Ok(())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    if config.cache.ttl_secs == 0 {
        return Err(Error::configuration("Credential TTL cannot be 0"));
    }
    if config.cache.ttl() <= config.lock.lease() {
        return Err(Error::configuration(format!(
            "Credential TTL ({}s) must be longer than the lock lease ({}ms)",
            config.cache.ttl_secs, config.lock.lease_ms
        )));
    }
    if config.cache.max_entries == 0 {
        return Err(Error::configuration("Cache capacity cannot be 0"));
    }
    Ok(())
}
