//! Typed access layer over the raw store: key namespacing, TTL policy and
//! serialization for the three entry shapes (feed, headline, article).
//!
//! The store is an accelerator, not a dependency: every backend error is
//! logged and swallowed, reads degrade to misses and writes are dropped,
//! so the pipeline keeps working with no cache at all.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use sn_core::fingerprint::fingerprint_str;
use sn_core::{Article, CacheStore, Category, RewrittenHeadline};

/// Feed entries are replaced wholesale every cycle and expire on their own.
pub const FEED_TTL: Duration = Duration::from_secs(900);

#[derive(Clone)]
pub struct NewsCache {
    store: Arc<dyn CacheStore>,
}

impl NewsCache {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    fn feed_key(category: Option<Category>) -> String {
        match category {
            Some(category) => format!("feed:{}", category),
            None => "feed:all".to_string(),
        }
    }

    fn headline_key(original_title: &str) -> String {
        format!("headline:{}", fingerprint_str(original_title))
    }

    fn meta_key(id: &str) -> String {
        format!("article:{}:meta", id)
    }

    fn content_key(id: &str) -> String {
        format!("article:{}:content", id)
    }

    pub async fn feed(&self, category: Option<Category>) -> Option<Vec<Article>> {
        let key = Self::feed_key(category);
        let raw = match self.store.get(&key).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("cache read failed for {}: {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(articles) => Some(articles),
            Err(e) => {
                warn!("discarding undecodable feed entry {}: {}", key, e);
                None
            }
        }
    }

    pub async fn set_feed(&self, category: Option<Category>, articles: &[Article]) {
        let key = Self::feed_key(category);
        let raw = match serde_json::to_string(articles) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("failed to encode feed entry {}: {}", key, e);
                return;
            }
        };
        if let Err(e) = self.store.set(&key, &raw, Some(FEED_TTL)).await {
            warn!("cache write failed for {}: {}", key, e);
        } else {
            debug!("💾 cached feed {} ({} articles)", key, articles.len());
        }
    }

    pub async fn headline(&self, original_title: &str) -> Option<RewrittenHeadline> {
        let key = Self::headline_key(original_title);
        let raw = match self.store.get(&key).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("cache read failed for {}: {}", key, e);
                return None;
            }
        };
        serde_json::from_str(&raw).ok()
    }

    pub async fn set_headline(&self, original_title: &str, rewritten: &RewrittenHeadline) {
        let key = Self::headline_key(original_title);
        let raw = match serde_json::to_string(rewritten) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("failed to encode headline entry {}: {}", key, e);
                return;
            }
        };
        // Permanent: the same original title never pays for a rewrite twice.
        if let Err(e) = self.store.set(&key, &raw, None).await {
            warn!("cache write failed for {}: {}", key, e);
        }
    }

    pub async fn article_meta(&self, id: &str) -> Option<Article> {
        let key = Self::meta_key(id);
        let raw = match self.store.get(&key).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("cache read failed for {}: {}", key, e);
                return None;
            }
        };
        serde_json::from_str(&raw).ok()
    }

    pub async fn set_article_meta(&self, article: &Article) {
        let key = Self::meta_key(&article.id);
        let raw = match serde_json::to_string(article) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("failed to encode article meta {}: {}", key, e);
                return;
            }
        };
        if let Err(e) = self.store.set(&key, &raw, None).await {
            warn!("cache write failed for {}: {}", key, e);
        }
    }

    pub async fn article_content(&self, id: &str) -> Option<String> {
        let key = Self::content_key(id);
        match self.store.get(&key).await {
            Ok(content) => content,
            Err(e) => {
                warn!("cache read failed for {}: {}", key, e);
                None
            }
        }
    }

    pub async fn set_article_content(&self, id: &str, content: &str) {
        let key = Self::content_key(id);
        if let Err(e) = self.store.set(&key, content, None).await {
            warn!("cache write failed for {}: {}", key, e);
        } else {
            debug!("💾 cached article content {}", key);
        }
    }

    /// Delete the fixed, enumerated set of feed keys: one per category plus
    /// "all". No wildcard scan. Returns the keys that were cleared.
    pub async fn clear_feeds(&self) -> Vec<String> {
        let mut keys = vec![Self::feed_key(None)];
        keys.extend(Category::ALL.iter().map(|c| Self::feed_key(Some(*c))));

        let mut cleared = Vec::with_capacity(keys.len());
        for key in keys {
            match self.store.delete(&key).await {
                Ok(()) => cleared.push(key),
                Err(e) => warn!("cache delete failed for {}: {}", key, e),
            }
        }
        debug!("🗑️ cleared {} feed keys", cleared.len());
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::MemoryCache;
    use async_trait::async_trait;
    use chrono::Utc;
    use sn_core::{article_id, Error, Result};

    fn article(url: &str) -> Article {
        Article {
            id: article_id(url),
            title: "Titel".to_string(),
            summary: "Zusammenfassung".to_string(),
            category: Category::Schweiz,
            source: "Blick Schweiz".to_string(),
            published_at: Utc::now(),
            original_url: url.to_string(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_feed_round_trip_with_ttl() {
        let store = Arc::new(MemoryCache::new());
        let cache = NewsCache::new(store.clone());

        let articles = vec![article("https://www.blick.ch/a"), article("https://www.blick.ch/b")];
        cache.set_feed(Some(Category::Schweiz), &articles).await;

        let cached = cache.feed(Some(Category::Schweiz)).await.unwrap();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0].id, articles[0].id);

        let ttl = store.remaining_ttl("feed:schweiz").await.unwrap();
        assert!(ttl <= Duration::from_secs(900));
        assert!(ttl > Duration::from_secs(890));
    }

    #[tokio::test]
    async fn test_headline_keyed_by_original_title() {
        let cache = NewsCache::new(Arc::new(MemoryCache::new()));

        let rewritten = RewrittenHeadline {
            title: "Sachlicher Titel".to_string(),
            summary: "Sachliche Zusammenfassung".to_string(),
        };
        cache.set_headline("SCHOCK! Originaltitel", &rewritten).await;

        assert_eq!(cache.headline("SCHOCK! Originaltitel").await, Some(rewritten));
        assert_eq!(cache.headline("Anderer Titel").await, None);
    }

    #[tokio::test]
    async fn test_article_meta_and_content() {
        let cache = NewsCache::new(Arc::new(MemoryCache::new()));
        let article = article("https://www.weltwoche.ch/artikel");

        cache.set_article_meta(&article).await;
        let meta = cache.article_meta(&article.id).await.unwrap();
        assert_eq!(meta.original_url, article.original_url);

        assert_eq!(cache.article_content(&article.id).await, None);
        cache.set_article_content(&article.id, "Der volle Text.").await;
        assert_eq!(
            cache.article_content(&article.id).await,
            Some("Der volle Text.".to_string())
        );
    }

    #[tokio::test]
    async fn test_clear_feeds_deletes_known_keys_only() {
        let store = Arc::new(MemoryCache::new());
        let cache = NewsCache::new(store.clone());

        cache.set_feed(None, &[article("https://www.blick.ch/a")]).await;
        cache
            .set_feed(Some(Category::Zuerich), &[article("https://www.blick.ch/b")])
            .await;
        cache.set_article_content("someid", "bleibt").await;

        let cleared = cache.clear_feeds().await;
        assert_eq!(cleared.len(), 1 + Category::ALL.len());
        assert!(cleared.contains(&"feed:all".to_string()));

        assert!(cache.feed(None).await.is_none());
        assert!(cache.feed(Some(Category::Zuerich)).await.is_none());
        // Article entries are untouched.
        assert_eq!(
            cache.article_content("someid").await,
            Some("bleibt".to_string())
        );
    }

    struct BrokenStore;

    #[async_trait]
    impl CacheStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Cache("unreachable".to_string()))
        }

        async fn set(&self, _key: &str, _value: &str, _ttl: Option<Duration>) -> Result<()> {
            Err(Error::Cache("unreachable".to_string()))
        }

        async fn delete(&self, _key: &str) -> Result<()> {
            Err(Error::Cache("unreachable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_unreachable_store_degrades_to_misses() {
        let cache = NewsCache::new(Arc::new(BrokenStore));

        // Writes are dropped, reads miss, nothing propagates an error.
        cache.set_feed(None, &[article("https://www.blick.ch/a")]).await;
        assert!(cache.feed(None).await.is_none());
        assert_eq!(cache.headline("Titel").await, None);
        assert!(cache.clear_feeds().await.is_empty());
    }
}
