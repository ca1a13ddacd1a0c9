use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use sn_core::{CacheStore, Result};

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.map(|at| at <= now).unwrap_or(false)
    }
}

struct MemoryStore {
    entries: HashMap<String, Entry>,
}

impl MemoryStore {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        let entry = self.entries.get(key)?;
        if entry.is_expired(Instant::now()) {
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&mut self, key: &str, value: &str, ttl: Option<Duration>) {
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: ttl.map(|ttl| Instant::now() + ttl),
            },
        );
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// In-process store, the default backend. Entries past their expiry read
/// as misses and are overwritten in place on the next write.
pub struct MemoryCache {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new())),
        }
    }

    /// Time left before `key` expires; `None` for absent or non-expiring keys.
    pub async fn remaining_ttl(&self, key: &str) -> Option<Duration> {
        let store = self.store.read().await;
        let entry = store.entries.get(key)?;
        let expires_at = entry.expires_at?;
        Some(expires_at.saturating_duration_since(Instant::now()))
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let store = self.store.read().await;
        Ok(store.get(key))
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        let mut store = self.store.write().await;
        store.set(key, value, ttl);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.delete(key);
        Ok(())
    }
}
