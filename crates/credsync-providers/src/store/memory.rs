//! In-memory shared store
//!
//! Single-process [`SharedStore`] with the same atomicity guarantees as the
//! Redis backend, scoped to the threads and tasks of one process. Clones
//! share the same map, which makes it a stand-in for several processes
//! pointing at one backend.
//!
//! Expiry is lazy: expired entries are treated as absent and evicted on the
//! next access. Time comes from `tokio::time`, so paused-clock tests can
//! drive lease expiry deterministically.

use async_trait::async_trait;
use credsync_domain::error::Result;
use credsync_domain::ports::SharedStore;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct StoredEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl StoredEntry {
    fn expiring(value: &str, ttl: Duration, now: Instant) -> Self {
        Self {
            value: value.to_string(),
            expires_at: Some(now + ttl),
        }
    }

    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| now < at)
    }
}

/// Process-local shared store
#[derive(Debug, Clone, Default)]
pub struct InMemorySharedStore {
    entries: Arc<DashMap<String, StoredEntry>>,
}

impl InMemorySharedStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Remaining time-to-live of a live key
    pub fn remaining_ttl(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        let entry = self.entries.get(key)?;
        if !entry.is_live(now) {
            return None;
        }
        entry.expires_at.map(|at| at.saturating_duration_since(now))
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.iter().filter(|entry| entry.is_live(now)).count()
    }

    /// Whether no live key exists
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every key
    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[async_trait]
impl SharedStore for InMemorySharedStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let now = Instant::now();
        let expired = match self.entries.get(key) {
            Some(entry) if entry.is_live(now) => return Ok(Some(entry.value.clone())),
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove_if(key, |_, entry| !entry.is_live(now));
        }
        Ok(None)
    }

    async fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        self.entries
            .insert(key.to_string(), StoredEntry::expiring(value, ttl, Instant::now()));
        Ok(())
    }

    async fn acquire_if_absent(&self, key: &str, token: &str, lease: Duration) -> Result<bool> {
        let now = Instant::now();
        let lock = StoredEntry::expiring(token, lease, now);
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_live(now) {
                    Ok(false)
                } else {
                    occupied.insert(lock);
                    Ok(true)
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(lock);
                Ok(true)
            }
        }
    }

    async fn release_if_matches(&self, key: &str, token: &str) -> Result<bool> {
        let now = Instant::now();
        Ok(self
            .entries
            .remove_if(key, |_, entry| entry.is_live(now) && entry.value == token)
            .is_some())
    }

    async fn extend_if_matches(&self, key: &str, token: &str, lease: Duration) -> Result<bool> {
        let now = Instant::now();
        match self.entries.get_mut(key) {
            Some(mut entry) if entry.is_live(now) && entry.value == token => {
                entry.expires_at = Some(now + lease);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
