use async_trait::async_trait;
use std::time::Duration;

use crate::Result;

/// Key-value store with optional per-key expiry. Backends live in the
/// sn_cache crate; this trait is what the pipeline is constructed with.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch the raw value under `key`, `None` on miss or expiry.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, expiring after `ttl` when given.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}
