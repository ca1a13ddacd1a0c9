//! Fan-out across all configured sources. Every source gets its own
//! bounded attempt; one bad upstream costs its own articles and nothing
//! else.

use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use sn_core::{Article, Category};

use crate::source::NewsSource;

/// Upper bound per source; slower upstreams count as failed this cycle.
pub const SOURCE_TIMEOUT: Duration = Duration::from_secs(12);

/// Fetch all sources concurrently and merge, newest first. Sources that
/// error or time out contribute nothing; the call itself never fails.
/// The sort is stable, so equal timestamps keep their relative order.
pub async fn fetch_all(sources: &[Arc<dyn NewsSource>]) -> Vec<Article> {
    let fetches = sources.iter().map(|source| {
        let source = source.clone();
        async move {
            let name = source.descriptor().display_name.clone();
            match tokio::time::timeout(SOURCE_TIMEOUT, source.fetch()).await {
                Ok(Ok(articles)) => {
                    debug!("📰 {} contributed {} articles", name, articles.len());
                    articles
                }
                Ok(Err(e)) => {
                    warn!("source {} failed: {}", name, e);
                    Vec::new()
                }
                Err(_) => {
                    warn!("source {} timed out after {:?}", name, SOURCE_TIMEOUT);
                    Vec::new()
                }
            }
        }
    });

    let mut articles: Vec<Article> = join_all(fetches).await.into_iter().flatten().collect();
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    articles
}

/// The sources relevant for one query.
pub fn sources_for(
    sources: &[Arc<dyn NewsSource>],
    category: Option<Category>,
) -> Vec<Arc<dyn NewsSource>> {
    match category {
        Some(category) => sources
            .iter()
            .filter(|source| source.descriptor().category == category)
            .cloned()
            .collect(),
        None => sources.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::StaticSource;

    #[tokio::test]
    async fn test_partial_failure_is_tolerated() {
        let sources: Vec<Arc<dyn NewsSource>> = vec![
            Arc::new(StaticSource::new(Category::Schweiz, "quelle-a", &["a1", "a2", "a3"])),
            Arc::new(StaticSource::failing(Category::Schweiz, "quelle-b")),
            Arc::new(StaticSource::new(Category::Schweiz, "quelle-c", &["c1", "c2"])),
        ];

        let articles = fetch_all(&sources).await;
        assert_eq!(articles.len(), 5);
        assert!(articles.iter().all(|a| a.source != "quelle-b"));
    }

    #[tokio::test]
    async fn test_all_sources_failing_yields_empty() {
        let sources: Vec<Arc<dyn NewsSource>> = vec![
            Arc::new(StaticSource::failing(Category::Schweiz, "quelle-a")),
            Arc::new(StaticSource::failing(Category::Schweiz, "quelle-b")),
        ];
        let articles = fetch_all(&sources).await;
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_merge_is_date_descending() {
        let sources: Vec<Arc<dyn NewsSource>> = vec![
            Arc::new(StaticSource::new(Category::Schweiz, "quelle-a", &["a1", "a2"])),
            Arc::new(StaticSource::new(Category::People, "quelle-b", &["b1", "b2"])),
        ];

        let articles = fetch_all(&sources).await;
        for pair in articles.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
        // Equal timestamps: quelle-a entries stay ahead of quelle-b's.
        assert_eq!(articles[0].source, "quelle-a");
        assert_eq!(articles[1].source, "quelle-b");
    }

    #[tokio::test]
    async fn test_sources_for_filters_by_category() {
        let sources: Vec<Arc<dyn NewsSource>> = vec![
            Arc::new(StaticSource::new(Category::Schweiz, "quelle-a", &["a1"])),
            Arc::new(StaticSource::new(Category::People, "quelle-b", &["b1"])),
        ];

        assert_eq!(sources_for(&sources, Some(Category::Schweiz)).len(), 1);
        assert_eq!(sources_for(&sources, None).len(), 2);
    }
}
