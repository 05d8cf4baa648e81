//! Redis shared store
//!
//! Shared store implementation for multi-node deployments.
//!
//! ## Primitives
//!
//! | Operation | Redis |
//! |-----------|-------|
//! | `get` | `GET` |
//! | `set_with_expiry` | `PSETEX` |
//! | `acquire_if_absent` | `SET key token NX PX lease` |
//! | `release_if_matches` | Lua compare-and-`DEL` |
//! | `extend_if_matches` | Lua compare-and-`PEXPIRE` |
//!
//! Connections come from a lazily created multiplexed connection manager; each
//! operation clones a handle for the duration of one command only, so no call
//! keeps a connection checked out while the issuer is being contacted.
//!
//! ## Example
//!
//! ```ignore
//! use credsync_providers::store::RedisSharedStore;
//!
//! let store = RedisSharedStore::new("redis://localhost:6379")?;
//! // Or with host/port
//! let store = RedisSharedStore::with_host_port("localhost", 6379)?;
//! ```

use crate::constants::REDIS_DEFAULT_URL;
use async_trait::async_trait;
use credsync_domain::error::{Error, Result};
use credsync_domain::ports::SharedStore;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError, Script};
use std::sync::LazyLock;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::debug;

static RELEASE_SCRIPT: LazyLock<Script> = LazyLock::new(|| {
    Script::new(
        r#"
if redis.call("GET", KEYS[1]) == ARGV[1] then
    return redis.call("DEL", KEYS[1])
end
return 0
"#,
    )
});

static EXTEND_SCRIPT: LazyLock<Script> = LazyLock::new(|| {
    Script::new(
        r#"
if redis.call("GET", KEYS[1]) == ARGV[1] then
    return redis.call("PEXPIRE", KEYS[1], ARGV[2])
end
return 0
"#,
    )
});

fn store_error(operation: &str, e: RedisError) -> Error {
    Error::store_unavailable_with_source(format!("Redis {operation} failed: {e}"), e)
}

/// Redis expiries are whole milliseconds and must be positive
fn as_millis(duration: Duration) -> u64 {
    (duration.as_millis() as u64).max(1)
}

/// Redis shared store
pub struct RedisSharedStore {
    client: Client,
    connection: OnceCell<ConnectionManager>,
}

impl RedisSharedStore {
    /// Create a store with a connection string
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// No connection is opened until the first operation.
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| {
            Error::configuration_with_source(format!("Invalid Redis URL: {e}"), e)
        })?;

        Ok(Self {
            client,
            connection: OnceCell::new(),
        })
    }

    /// Create a store with host and port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{host}:{port}"))
    }

    /// Create a store for a Redis server on the local default port
    pub fn local() -> Result<Self> {
        Self::new(REDIS_DEFAULT_URL)
    }

    /// Get a connection handle for one command
    async fn connection(&self) -> Result<ConnectionManager> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                debug!("Opening Redis connection manager");
                ConnectionManager::new(self.client.clone())
                    .await
                    .map_err(|e| store_error("CONNECT", e))
            })
            .await?;
        Ok(manager.clone())
    }
}

#[async_trait]
impl SharedStore for RedisSharedStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| store_error("GET", e))
    }

    async fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut conn = self.connection().await?;
        conn.pset_ex::<_, _, ()>(key, value, as_millis(ttl))
            .await
            .map_err(|e| store_error("PSETEX", e))
    }

    async fn acquire_if_absent(&self, key: &str, token: &str, lease: Duration) -> Result<bool> {
        let mut conn = self.connection().await?;
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(token)
            .arg("NX")
            .arg("PX")
            .arg(as_millis(lease))
            .query_async(&mut conn)
            .await
            .map_err(|e| store_error("SET NX", e))?;
        Ok(reply.is_some())
    }

    async fn release_if_matches(&self, key: &str, token: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        let deleted: i64 = RELEASE_SCRIPT
            .key(key)
            .arg(token)
            .invoke_async(&mut conn)
            .await
            .map_err(|e| store_error("release script", e))?;
        Ok(deleted > 0)
    }

    async fn extend_if_matches(&self, key: &str, token: &str, lease: Duration) -> Result<bool> {
        let mut conn = self.connection().await?;
        let extended: i64 = EXTEND_SCRIPT
            .key(key)
            .arg(token)
            .arg(as_millis(lease))
            .invoke_async(&mut conn)
            .await
            .map_err(|e| store_error("extend script", e))?;
        Ok(extended > 0)
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisSharedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSharedStore")
            .field("connected", &self.connection.initialized())
            .finish()
    }
}
